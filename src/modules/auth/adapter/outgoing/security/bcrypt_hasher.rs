use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::error;

use crate::modules::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher,
};

/// bcrypt adapter. Each operation runs on the blocking pool since a single
/// hash costs tens of milliseconds at `DEFAULT_COST`.
#[derive(Default)]
pub struct BcryptHasher;

impl BcryptHasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
            .await
            .map_err(|e| {
                error!("bcrypt hash task panicked: {e}");
                HashError::TaskFailed
            })?
            .map_err(|e| {
                error!("bcrypt hash failed: {e}");
                HashError::HashFailed
            })
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || verify(password, &hash))
            .await
            .map_err(|e| {
                error!("bcrypt verify task panicked: {e}");
                HashError::TaskFailed
            })?
            .map_err(|e| {
                error!("bcrypt verify failed: {e}");
                HashError::VerifyFailed
            })
    }
}
