use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::modules::auth::application::ports::outgoing::admin_repository::AdminRepository;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub username: String,
    pub must_change_password: bool,
}

#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, username: &str, password: &str) -> Result<LoginOutcome, LoginError>;
}

pub struct LoginAdminUseCase {
    admins: Arc<dyn AdminRepository + Send + Sync>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl LoginAdminUseCase {
    pub fn new(
        admins: Arc<dyn AdminRepository + Send + Sync>,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            admins,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, username: &str, password: &str) -> Result<LoginOutcome, LoginError> {
        let admin = self
            .admins
            .find_by_username(username)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        // An unknown username and a wrong password answer identically.
        let Some(admin) = admin else {
            warn!(username, "Login attempt for unknown admin");
            return Err(LoginError::InvalidCredentials);
        };

        let password_matches = self
            .hasher
            .verify_password(password, &admin.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !password_matches {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue_token(&admin.id, &admin.username)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginOutcome {
            token,
            username: admin.username,
            must_change_password: admin.must_change_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Admin;
    use crate::modules::auth::application::ports::outgoing::admin_repository::{
        AdminRepositoryError, MockAdminRepository,
    };
    use crate::modules::auth::application::ports::outgoing::password_hasher::MockPasswordHasher;
    use crate::modules::auth::application::ports::outgoing::token_provider::MockTokenProvider;
    use chrono::Utc;

    fn sample_admin() -> Admin {
        Admin {
            id: "507f1f77bcf86cd799439011".to_string(),
            username: "admin".to_string(),
            password_hash: "$2b$12$fakehash".to_string(),
            must_change_password: false,
            created_at: Utc::now(),
        }
    }

    fn use_case(
        admins: MockAdminRepository,
        hasher: MockPasswordHasher,
        tokens: MockTokenProvider,
    ) -> LoginAdminUseCase {
        LoginAdminUseCase::new(Arc::new(admins), Arc::new(hasher), Arc::new(tokens))
    }

    #[tokio::test]
    async fn test_login_success_returns_token_and_username() {
        let mut admins = MockAdminRepository::new();
        admins
            .expect_find_by_username()
            .returning(|_| Ok(Some(sample_admin())));

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify_password().returning(|_, _| Ok(true));

        let mut tokens = MockTokenProvider::new();
        tokens
            .expect_issue_token()
            .returning(|_, _| Ok("signed.jwt.token".to_string()));

        let outcome = use_case(admins, hasher, tokens)
            .execute("admin", "admin123")
            .await
            .expect("login should succeed");

        assert_eq!(outcome.token, "signed.jwt.token");
        assert_eq!(outcome.username, "admin");
        assert!(!outcome.must_change_password);
    }

    #[tokio::test]
    async fn test_login_unknown_username_is_invalid_credentials() {
        let mut admins = MockAdminRepository::new();
        admins.expect_find_by_username().returning(|_| Ok(None));

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify_password().never();

        let tokens = MockTokenProvider::new();

        let result = use_case(admins, hasher, tokens)
            .execute("nobody", "admin123")
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let mut admins = MockAdminRepository::new();
        admins
            .expect_find_by_username()
            .returning(|_| Ok(Some(sample_admin())));

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify_password().returning(|_, _| Ok(false));

        let mut tokens = MockTokenProvider::new();
        tokens.expect_issue_token().never();

        let result = use_case(admins, hasher, tokens)
            .execute("admin", "wrong")
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_surfaces_repository_failure() {
        let mut admins = MockAdminRepository::new();
        admins.expect_find_by_username().returning(|_| {
            Err(AdminRepositoryError::DatabaseError(
                "connection reset".to_string(),
            ))
        });

        let result = use_case(admins, MockPasswordHasher::new(), MockTokenProvider::new())
            .execute("admin", "admin123")
            .await;

        assert!(matches!(result, Err(LoginError::RepositoryError(_))));
    }

    #[tokio::test]
    async fn test_login_flags_pending_password_rotation() {
        let mut admins = MockAdminRepository::new();
        admins.expect_find_by_username().returning(|_| {
            Ok(Some(Admin {
                must_change_password: true,
                ..sample_admin()
            }))
        });

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify_password().returning(|_, _| Ok(true));

        let mut tokens = MockTokenProvider::new();
        tokens
            .expect_issue_token()
            .returning(|_, _| Ok("signed.jwt.token".to_string()));

        let outcome = use_case(admins, hasher, tokens)
            .execute("admin", "admin123")
            .await
            .expect("login should succeed");

        assert!(outcome.must_change_password);
    }
}
