use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims embedded in an admin bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String, // Admin document id (hex)
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Verification is a plain `Result` consumed by the routing layer; a failure
/// is data, not control flow.
#[cfg_attr(test, mockall::automock)]
pub trait TokenProvider: Send + Sync {
    fn issue_token(&self, admin_id: &str, username: &str) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
}
