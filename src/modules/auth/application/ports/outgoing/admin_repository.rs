use crate::modules::auth::application::domain::entities::{Admin, NewAdmin};
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Admin not found")]
    NotFound,

    #[error("Data access failed: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(&self, username: &str)
        -> Result<Option<Admin>, AdminRepositoryError>;

    async fn insert(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError>;

    /// Overwrites the stored hash and clears the rotation flag.
    async fn update_password(
        &self,
        admin_id: &str,
        password_hash: &str,
    ) -> Result<(), AdminRepositoryError>;
}
