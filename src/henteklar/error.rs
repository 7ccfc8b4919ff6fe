use crate::model::ChildId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HenteklarError {
    #[error("Child not found: {0}")]
    ChildNotFound(ChildId),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Not logged in")]
    Unauthenticated,

    #[error("{0}")]
    Validation(String),

    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Storage error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl HenteklarError {
    /// Errors a client should render as an inline notice rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HenteklarError::ChildNotFound(_) | HenteklarError::ContactNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HenteklarError>;
