//! # Storage Layer
//!
//! The [`RosterStore`] trait is the only way the rest of the crate reaches the
//! roster. Commands read through it and the attendance and contact commands are
//! the only callers of [`RosterStore::save_child`].
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the roster held for the lifetime of the process.
//!   It is seeded from [`seed::roster`] on startup and is never written to disk,
//!   so every restart begins from the same fixture state.
//!
//! ## Lookups
//!
//! A missing child is an ordinary outcome (a stale view, a mistyped id), so
//! [`RosterStore::get_child`] returns `Option` and leaves the decision to the
//! caller. Only writes to an unknown id are errors, because the set of enrolled
//! children is fixed once the store is built.

use crate::error::Result;
use crate::model::{Child, ChildId};

pub mod memory;
pub mod seed;

/// Abstract interface for the roster.
pub trait RosterStore {
    /// All children, in enrollment order
    fn list_children(&self) -> Result<Vec<Child>>;

    /// A single child, or `None` when the id is not enrolled
    fn get_child(&self, id: &ChildId) -> Result<Option<Child>>;

    /// Replace an existing child record
    fn save_child(&mut self, child: &Child) -> Result<()>;
}
