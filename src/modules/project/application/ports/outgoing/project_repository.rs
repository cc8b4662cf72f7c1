use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{NewProject, Project, ProjectPatch};

#[derive(Debug, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, newest first.
    async fn find_all(&self) -> Result<Vec<Project>, ProjectRepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, ProjectRepositoryError>;
    async fn create(&self, new_project: NewProject) -> Result<Project, ProjectRepositoryError>;
    async fn update(&self, id: &str, patch: ProjectPatch)
        -> Result<Project, ProjectRepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError>;
}
