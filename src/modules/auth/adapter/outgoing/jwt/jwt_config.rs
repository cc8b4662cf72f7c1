use std::env;

/// Signing configuration for admin bearer tokens. The secret is mandatory and
/// has no fallback; a short secret is rejected at startup rather than at the
/// first failed verification.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub token_expiry: i64,
}

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 86400;

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET is not set in .env file");
        if secret_key.len() < MIN_SECRET_LEN {
            panic!("JWT_SECRET must be at least {MIN_SECRET_LEN} characters");
        }

        let token_expiry = env::var("JWT_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECS);

        Self {
            secret_key,
            token_expiry,
        }
    }

    pub fn new(secret_key: String, token_expiry: i64) -> Self {
        Self {
            secret_key,
            token_expiry,
        }
    }
}
