//! # Session Gate
//!
//! Simulated login lifecycle guarding access to the roster.
//!
//! ```text
//!                 login()                      authenticate + persist ok
//! Unauthenticated ───────▶ Authenticating ─────────────────────────────▶ Authenticated
//!        ▲                        │ auth or persistence failure                │
//!        └────────────────────────┴────────────────────────────────────────────┘
//!                                                   logout()
//! ```
//!
//! `rehydrate()` is the only transition that skips `Authenticating`: on start
//! the persisted identity (key [`USER_KEY`] in a [`KeyValueStore`]) is read
//! back and, when present, the gate opens directly.
//!
//! Storage failures never escape as panics. Reads that fail are logged and
//! treated as "no session"; failed writes during login are logged, leave the
//! gate closed, and are returned so the client can show them inline.

use crate::error::Result;
use crate::model::User;
use tracing::{debug, info, warn};

pub mod auth;
pub mod kv;

pub use auth::{demo_user, Authenticator, DemoAuthenticator};
pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore};

/// Key of the persisted identity.
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated(User),
}

pub struct SessionGate<K: KeyValueStore, A: Authenticator> {
    slot: K,
    authenticator: A,
    state: SessionState,
}

impl<K: KeyValueStore, A: Authenticator> SessionGate<K, A> {
    /// A closed gate. Call [`rehydrate`](Self::rehydrate) to restore a
    /// persisted session.
    pub fn new(slot: K, authenticator: A) -> Self {
        Self {
            slot,
            authenticator,
            state: SessionState::Unauthenticated,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn rehydrate(&mut self) -> &SessionState {
        self.state = match self.slot.get(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    debug!(user = %user.email, "session restored");
                    SessionState::Authenticated(user)
                }
                Err(e) => {
                    warn!(error = %e, "stored session is unreadable, starting logged out");
                    SessionState::Unauthenticated
                }
            },
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                warn!(error = %e, "could not read stored session, starting logged out");
                SessionState::Unauthenticated
            }
        };
        &self.state
    }

    /// Authenticates and persists the resulting identity.
    ///
    /// Callers validate that `email` and `password` are non-empty first.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        self.state = SessionState::Authenticating;

        let user = match self.authenticator.authenticate(email, password) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "login failed");
                self.state = SessionState::Unauthenticated;
                return Err(e);
            }
        };

        if let Err(e) = self.persist(&user) {
            warn!(error = %e, "could not persist session");
            self.state = SessionState::Unauthenticated;
            return Err(e);
        }

        info!(user = %user.email, "logged in");
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    /// Clears the persisted identity. The gate closes even when clearing fails.
    pub fn logout(&mut self) {
        if let Err(e) = self.slot.remove(USER_KEY) {
            warn!(error = %e, "could not clear stored session");
        }
        if let Some(user) = self.user() {
            info!(user = %user.email, "logged out");
        }
        self.state = SessionState::Unauthenticated;
    }

    fn persist(&mut self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.slot.set(USER_KEY, &raw)
    }

    pub fn slot(&self) -> &K {
        &self.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HenteklarError;
    use crate::model::Role;

    struct BrokenSlot;

    impl KeyValueStore for BrokenSlot {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(HenteklarError::Persistence("disk on fire".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(HenteklarError::Persistence("disk on fire".into()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(HenteklarError::Persistence("disk on fire".into()))
        }
    }

    struct Rejecting;

    impl Authenticator for Rejecting {
        fn authenticate(&self, _email: &str, _password: &str) -> Result<User> {
            Err(HenteklarError::AuthFailed("wrong password".into()))
        }
    }

    fn gate() -> SessionGate<MemoryKvStore, DemoAuthenticator> {
        SessionGate::new(MemoryKvStore::new(), DemoAuthenticator::instant())
    }

    #[test]
    fn starts_unauthenticated() {
        let gate = gate();
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
        assert!(gate.user().is_none());
    }

    #[test]
    fn login_authenticates_and_persists_demo_user() {
        let mut gate = gate();
        let user = gate.login("a@b.com", "pw").unwrap();

        assert_eq!(user, demo_user());
        assert_eq!(user.role, Role::Staff);
        assert_eq!(gate.state(), &SessionState::Authenticated(demo_user()));

        let stored = gate.slot().get(USER_KEY).unwrap().unwrap();
        let stored: User = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored, demo_user());
    }

    #[test]
    fn logout_clears_slot_and_rehydrate_stays_logged_out() {
        let mut gate = gate();
        gate.login("a@b.com", "pw").unwrap();
        gate.logout();

        assert_eq!(gate.slot().get(USER_KEY).unwrap(), None);
        assert_eq!(gate.rehydrate(), &SessionState::Unauthenticated);
    }

    #[test]
    fn rehydrate_restores_persisted_identity() {
        let mut slot = MemoryKvStore::new();
        slot.set(USER_KEY, &serde_json::to_string(&demo_user()).unwrap())
            .unwrap();

        let mut gate = SessionGate::new(slot, DemoAuthenticator::instant());
        assert_eq!(
            gate.rehydrate(),
            &SessionState::Authenticated(demo_user())
        );
    }

    #[test]
    fn rehydrate_treats_corrupt_slot_as_logged_out() {
        let mut slot = MemoryKvStore::new();
        slot.set(USER_KEY, "{not a user").unwrap();

        let mut gate = SessionGate::new(slot, DemoAuthenticator::instant());
        assert_eq!(gate.rehydrate(), &SessionState::Unauthenticated);
    }

    #[test]
    fn unreadable_slot_fails_safe() {
        let mut gate = SessionGate::new(BrokenSlot, DemoAuthenticator::instant());
        assert_eq!(gate.rehydrate(), &SessionState::Unauthenticated);

        let err = gate.login("a@b.com", "pw").unwrap_err();
        assert!(matches!(err, HenteklarError::Persistence(_)));
        assert_eq!(gate.state(), &SessionState::Unauthenticated);

        gate.logout();
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn rejected_credentials_leave_gate_closed() {
        let mut gate = SessionGate::new(MemoryKvStore::new(), Rejecting);
        let err = gate.login("a@b.com", "pw").unwrap_err();
        assert!(matches!(err, HenteklarError::AuthFailed(_)));
        assert!(!gate.is_authenticated());
        assert_eq!(gate.slot().get(USER_KEY).unwrap(), None);
    }
}
