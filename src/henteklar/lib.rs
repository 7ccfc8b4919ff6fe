//! # Henteklar
//!
//! Attendance roster for a kindergarten: staff log in, see which children are
//! present, and check children in at drop-off and out at pick-up.
//!
//! The crate is a **UI-agnostic library** with a terminal client on top. The
//! client is one consumer of the API; nothing below it assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, runs the shell         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Gates roster access behind the session                   │
//! │  - Supplies the clock, dispatches to commands               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Attendance transitions, roster queries, contacts         │
//! │  - Operates on Rust types, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, session/)                           │
//! │  - RosterStore trait, InMemoryStore seeded per process      │
//! │  - KeyValueStore trait holding the single session slot      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Attendance
//!
//! A child is either checked in or checked out, and carries the time of the
//! last transition (`HH:MM`). [`commands::attendance::toggle`] is the only code
//! that changes this state. State and time always move together.
//!
//! ## Testing
//!
//! Commands carry most of the tests and run against
//! [`store::memory::InMemoryStore`]. API tests check gating and dispatch.
//! The binary is covered by integration tests under `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Roster storage abstraction and the seed roster
//! - [`session`]: Session gate, key-value slot and authenticator
//! - [`model`]: Core data types (`Child`, `Contact`, `User`)
//! - [`nav`]: Screen router used by interactive clients
//! - [`i18n`]: Norwegian and English strings
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod nav;
pub mod session;
pub mod store;
