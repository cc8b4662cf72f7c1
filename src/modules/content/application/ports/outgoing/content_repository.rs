use async_trait::async_trait;

use crate::modules::content::application::domain::entities::PortfolioContent;

#[derive(Debug, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<PortfolioContent>, ContentRepositoryError>;
    async fn find_by_section(
        &self,
        section: &str,
    ) -> Result<Option<PortfolioContent>, ContentRepositoryError>;
    /// Creates the section on first write, replaces its content afterwards.
    async fn upsert(
        &self,
        section: &str,
        content: &str,
    ) -> Result<PortfolioContent, ContentRepositoryError>;
}
