//! # API Facade
//!
//! Single entry point for every Henteklar operation, whichever client drives it.
//!
//! The facade:
//! - **Gates** roster access behind the [`SessionGate`]: listing, profiles,
//!   attendance and contact operations fail with
//!   [`HenteklarError::Unauthenticated`] until someone has logged in
//! - **Injects the clock** for attendance transitions
//! - **Dispatches** to the command layer and returns `Result<CmdResult>`
//!
//! It holds no business rules and performs no terminal I/O. Commands never
//! check the session themselves; this is the only place that does.
//!
//! `HenteklarApi<S, K, A>` is generic over the roster store, the session slot
//! and the authenticator, so tests run entirely in memory:
//!
//! ```
//! use henteklar::api::HenteklarApi;
//! use henteklar::commands::HenteklarPaths;
//! use henteklar::session::{DemoAuthenticator, MemoryKvStore};
//! use henteklar::store::memory::InMemoryStore;
//!
//! let mut api = HenteklarApi::new(
//!     InMemoryStore::seeded(),
//!     MemoryKvStore::new(),
//!     DemoAuthenticator::instant(),
//!     HenteklarPaths::new(std::env::temp_dir()),
//! );
//! assert!(api.list_children(&Default::default()).is_err());
//! api.login("kari@barnehage.no", "hemmelig").unwrap();
//! assert_eq!(api.summary().unwrap().counts.unwrap().total, 8);
//! ```

use crate::commands;
use crate::error::{HenteklarError, Result};
use crate::i18n::{Locale, Translator};
use crate::model::{ChildId, User};
use crate::session::{Authenticator, KeyValueStore, SessionGate, SessionState};
use crate::store::RosterStore;
use chrono::{Local, NaiveTime};

pub struct HenteklarApi<S: RosterStore, K: KeyValueStore, A: Authenticator> {
    store: S,
    gate: SessionGate<K, A>,
    translator: Translator,
    paths: commands::HenteklarPaths,
}

impl<S: RosterStore, K: KeyValueStore, A: Authenticator> HenteklarApi<S, K, A> {
    /// Builds the facade with a closed session gate.
    pub fn new(store: S, slot: K, authenticator: A, paths: commands::HenteklarPaths) -> Self {
        Self {
            store,
            gate: SessionGate::new(slot, authenticator),
            translator: Translator::default(),
            paths,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.translator.set_locale(locale);
        self
    }

    // --- session ---

    pub fn rehydrate(&mut self) -> &SessionState {
        self.gate.rehydrate()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<commands::CmdResult> {
        commands::session::login(&mut self.gate, email, password)
    }

    pub fn logout(&mut self) -> commands::CmdResult {
        commands::session::logout(&mut self.gate)
    }

    pub fn whoami(&self) -> commands::CmdResult {
        commands::session::whoami(&self.gate)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.gate.user()
    }

    pub fn session_state(&self) -> &SessionState {
        self.gate.state()
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    // --- roster ---

    pub fn list_children(&self, filter: &RosterFilter) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::query::run(&self.store, filter)
    }

    pub fn summary(&self) -> Result<commands::CmdResult> {
        self.require_session()?;
        let counts = commands::query::counts(&self.store)?;
        Ok(commands::CmdResult::default().with_counts(counts))
    }

    pub fn child_profile(&self, id: &str) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::profile::run(&self.store, &ChildId::new(id))
    }

    /// Toggles attendance, stamped with the local wall clock.
    pub fn toggle_attendance(&mut self, id: &str) -> Result<commands::CmdResult> {
        self.toggle_attendance_at(id, Local::now().time())
    }

    pub fn toggle_attendance_at(
        &mut self,
        id: &str,
        now: NaiveTime,
    ) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::attendance::toggle(&mut self.store, &ChildId::new(id), now)
    }

    pub fn set_primary_contact(
        &mut self,
        child_id: &str,
        contact_id: &str,
    ) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::contacts::set_primary(&mut self.store, &ChildId::new(child_id), contact_id)
    }

    pub fn contact_actions(&self, child_id: &str) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::contacts::actions(&self.store, &ChildId::new(child_id))
    }

    // --- localization and config ---

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn set_language(&mut self, locale: Locale) {
        self.translator.set_locale(locale);
    }

    pub fn toggle_language(&mut self) -> Locale {
        self.translator.toggle()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::HenteklarPaths {
        &self.paths
    }

    fn require_session(&self) -> Result<()> {
        if self.gate.is_authenticated() {
            Ok(())
        } else {
            Err(HenteklarError::Unauthenticated)
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::query::{RosterCounts, RosterFilter, StatusFilter};
pub use commands::{CmdMessage, CmdResult, HenteklarPaths, MessageLevel};
