use crate::config::DEFAULT_LOGIN_DELAY_MS;
use crate::error::Result;
use crate::model::{Role, User};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Verifies credentials and resolves the identity behind them.
///
/// [`SessionGate`](super::SessionGate) only talks to this trait, so replacing
/// the demo implementation with a real identity service leaves the gate's
/// `login`/`logout`/`rehydrate` surface untouched. Implementations report
/// rejected credentials as [`HenteklarError::AuthFailed`](crate::error::HenteklarError::AuthFailed).
pub trait Authenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<User>;
}

/// Accepts any credentials after a fixed pause and returns [`demo_user`].
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    delay: Duration,
}

impl DemoAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_LOGIN_DELAY_MS))
    }
}

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, email: &str, _password: &str) -> Result<User> {
        debug!(email, delay_ms = self.delay.as_millis() as u64, "demo authentication");
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(demo_user())
    }
}

pub fn demo_user() -> User {
    User {
        name: "Kari Nordmann".to_string(),
        email: "kari.nordmann@barnehage.no".to_string(),
        role: Role::Staff,
        avatar: "KN".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn default_waits_800_ms() {
        assert_eq!(DemoAuthenticator::default().delay(), Duration::from_millis(800));
        assert_eq!(DemoAuthenticator::instant().delay(), Duration::ZERO);
    }

    #[test]
    fn authenticate_blocks_for_the_delay() {
        let auth = DemoAuthenticator::new(Duration::from_millis(50));
        let started = Instant::now();
        auth.authenticate("a@b.com", "pw").unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn any_credentials_resolve_to_the_demo_user() {
        let auth = DemoAuthenticator::instant();
        for (email, password) in [
            ("a@b.com", "pw"),
            ("someone.else@example.org", "x"),
            ("not-an-email", "long password with spaces"),
        ] {
            assert_eq!(auth.authenticate(email, password).unwrap(), demo_user());
        }
        assert_eq!(demo_user().name, "Kari Nordmann");
        assert_eq!(demo_user().role, Role::Staff);
    }
}
