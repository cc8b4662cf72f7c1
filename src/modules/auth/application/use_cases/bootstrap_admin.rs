use std::sync::Arc;

use tracing::info;

use crate::modules::auth::application::domain::entities::NewAdmin;
use crate::modules::auth::application::ports::outgoing::admin_repository::AdminRepository;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created,
    AlreadyPresent,
}

/// Idempotent first-boot account creation. Credentials come from mandatory
/// configuration; the created account carries the rotation flag so the
/// bootstrap password does not outlive the first login.
pub struct BootstrapAdmin {
    admins: Arc<dyn AdminRepository + Send + Sync>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl BootstrapAdmin {
    pub fn new(
        admins: Arc<dyn AdminRepository + Send + Sync>,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self { admins, hasher }
    }

    pub async fn ensure_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<BootstrapOutcome, BootstrapError> {
        let existing = self
            .admins
            .find_by_username(username)
            .await
            .map_err(|e| BootstrapError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        let password_hash = self
            .hasher
            .hash_password(password)
            .await
            .map_err(|e| BootstrapError::HashFailed(e.to_string()))?;

        self.admins
            .insert(NewAdmin {
                username: username.to_string(),
                password_hash,
                must_change_password: true,
            })
            .await
            .map_err(|e| BootstrapError::RepositoryError(e.to_string()))?;

        info!(username, "Admin account bootstrapped");
        Ok(BootstrapOutcome::Created)
    }
}
