use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError,
};
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;

#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Admin not found")]
    AdminNotFound,

    #[error("Current password is incorrect")]
    CurrentPasswordIncorrect,

    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ChangePasswordError>;
}

pub struct ChangePasswordUseCase {
    admins: Arc<dyn AdminRepository + Send + Sync>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl ChangePasswordUseCase {
    pub fn new(
        admins: Arc<dyn AdminRepository + Send + Sync>,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self { admins, hasher }
    }
}

#[async_trait]
impl IChangePasswordUseCase for ChangePasswordUseCase {
    async fn execute(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ChangePasswordError> {
        let admin = self
            .admins
            .find_by_username(username)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::AdminNotFound)?;

        let current_matches = self
            .hasher
            .verify_password(current_password, &admin.password_hash)
            .await
            .map_err(|e| ChangePasswordError::PasswordVerificationFailed(e.to_string()))?;

        if !current_matches {
            return Err(ChangePasswordError::CurrentPasswordIncorrect);
        }

        let new_hash = self
            .hasher
            .hash_password(new_password)
            .await
            .map_err(|e| ChangePasswordError::HashFailed(e.to_string()))?;

        self.admins
            .update_password(&admin.id, &new_hash)
            .await
            .map_err(|e| match e {
                AdminRepositoryError::NotFound => ChangePasswordError::AdminNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })
    }
}
