use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{
    Experience, ExperiencePatch, NewExperience,
};

#[derive(Debug, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// All experiences, most recent start date first.
    async fn find_all(&self) -> Result<Vec<Experience>, ExperienceRepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, ExperienceRepositoryError>;
    async fn create(
        &self,
        new_experience: NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError>;
    async fn update(
        &self,
        id: &str,
        patch: ExperiencePatch,
    ) -> Result<Experience, ExperienceRepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), ExperienceRepositoryError>;
}
