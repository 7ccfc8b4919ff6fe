use crate::commands::CmdResult;
use crate::error::{HenteklarError, Result};
use crate::session::{Authenticator, KeyValueStore, SessionGate};

/// Checks the login form before the gate is touched.
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(HenteklarError::MissingCredentials);
    }
    Ok(())
}

pub fn login<K: KeyValueStore, A: Authenticator>(
    gate: &mut SessionGate<K, A>,
    email: &str,
    password: &str,
) -> Result<CmdResult> {
    validate_credentials(email, password)?;
    let user = gate.login(email.trim(), password)?;
    Ok(CmdResult::default().with_user(user))
}

pub fn logout<K: KeyValueStore, A: Authenticator>(gate: &mut SessionGate<K, A>) -> CmdResult {
    gate.logout();
    CmdResult::default()
}

pub fn whoami<K: KeyValueStore, A: Authenticator>(gate: &SessionGate<K, A>) -> CmdResult {
    match gate.user() {
        Some(user) => CmdResult::default().with_user(user.clone()),
        None => CmdResult::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{demo_user, DemoAuthenticator, MemoryKvStore, SessionState};

    fn gate() -> SessionGate<MemoryKvStore, DemoAuthenticator> {
        SessionGate::new(MemoryKvStore::new(), DemoAuthenticator::instant())
    }

    #[test]
    fn empty_fields_never_reach_the_gate() {
        let mut gate = gate();
        for (email, password) in [("", "pw"), ("a@b.com", ""), ("   ", "pw")] {
            let err = login(&mut gate, email, password).unwrap_err();
            assert!(matches!(err, HenteklarError::MissingCredentials));
        }
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn login_then_whoami() {
        let mut gate = gate();
        assert!(whoami(&gate).user.is_none());

        let result = login(&mut gate, "a@b.com", "pw").unwrap();
        assert_eq!(result.user, Some(demo_user()));
        assert_eq!(whoami(&gate).user, Some(demo_user()));

        logout(&mut gate);
        assert!(whoami(&gate).user.is_none());
    }
}
