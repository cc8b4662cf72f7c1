//! In-memory stand-ins for the outgoing ports. Route tests seed them with
//! fixture data or flip them into failure mode instead of mocking each call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::auth::application::use_cases::change_password::{
    ChangePasswordError, IChangePasswordUseCase,
};
use crate::modules::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginError, LoginOutcome,
};
use crate::modules::contact::application::ports::outgoing::contact_notifier::{
    ContactMessage, ContactNotifier, EmailError,
};
use crate::modules::content::application::domain::entities::PortfolioContent;
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentRepository, ContentRepositoryError,
};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperiencePatch, NewExperience,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::modules::project::application::domain::entities::{NewProject, Project, ProjectPatch};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

pub const STUB_ID: &str = "507f1f77bcf86cd799439099";

pub struct StubLoginAdmin;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdmin {
    async fn execute(&self, _username: &str, _password: &str) -> Result<LoginOutcome, LoginError> {
        Err(LoginError::RepositoryError("not wired in this test".to_string()))
    }
}

pub struct StubChangePassword;

#[async_trait]
impl IChangePasswordUseCase for StubChangePassword {
    async fn execute(
        &self,
        _username: &str,
        _current_password: &str,
        _new_password: &str,
    ) -> Result<(), ChangePasswordError> {
        Err(ChangePasswordError::RepositoryError(
            "not wired in this test".to_string(),
        ))
    }
}

pub struct StubProjectRepository {
    projects: Vec<Project>,
    fail: bool,
}

impl StubProjectRepository {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self::with_projects(Vec::new())
    }

    pub fn failing() -> Self {
        Self {
            projects: Vec::new(),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), ProjectRepositoryError> {
        if self.fail {
            return Err(ProjectRepositoryError::DatabaseError(
                "stubbed failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for StubProjectRepository {
    async fn find_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        self.check()?;
        Ok(self.projects.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, ProjectRepositoryError> {
        self.check()?;
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, new_project: NewProject) -> Result<Project, ProjectRepositoryError> {
        self.check()?;
        Ok(Project {
            id: STUB_ID.to_string(),
            title: new_project.title,
            description: new_project.description,
            long_description: new_project.long_description,
            technologies: new_project.technologies,
            github_url: new_project.github_url,
            live_url: new_project.live_url,
            image_url: new_project.image_url,
            start_date: new_project.start_date,
            end_date: new_project.end_date,
            featured: new_project.featured,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    async fn update(
        &self,
        id: &str,
        patch: ProjectPatch,
    ) -> Result<Project, ProjectRepositoryError> {
        self.check()?;
        let mut project = self
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProjectRepositoryError::NotFound)?;

        if let Some(title) = patch.title {
            project.title = title;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }
        if let Some(technologies) = patch.technologies {
            project.technologies = technologies;
        }
        if let Some(featured) = patch.featured {
            project.featured = featured;
        }
        project.updated_at = Utc::now();
        Ok(project)
    }

    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError> {
        self.check()?;
        if self.projects.iter().any(|p| p.id == id) {
            Ok(())
        } else {
            Err(ProjectRepositoryError::NotFound)
        }
    }
}

pub struct StubExperienceRepository {
    experiences: Vec<Experience>,
    fail: bool,
}

impl StubExperienceRepository {
    pub fn with_experiences(experiences: Vec<Experience>) -> Self {
        Self {
            experiences,
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self::with_experiences(Vec::new())
    }

    pub fn failing() -> Self {
        Self {
            experiences: Vec::new(),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), ExperienceRepositoryError> {
        if self.fail {
            return Err(ExperienceRepositoryError::DatabaseError(
                "stubbed failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ExperienceRepository for StubExperienceRepository {
    async fn find_all(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        self.check()?;
        Ok(self.experiences.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, ExperienceRepositoryError> {
        self.check()?;
        Ok(self.experiences.iter().find(|e| e.id == id).cloned())
    }

    async fn create(
        &self,
        new_experience: NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError> {
        self.check()?;
        Ok(Experience {
            id: STUB_ID.to_string(),
            title: new_experience.title,
            company: new_experience.company,
            location: new_experience.location,
            description: new_experience.description,
            technologies: new_experience.technologies,
            start_date: new_experience.start_date,
            end_date: new_experience.end_date,
            current: new_experience.current,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    async fn update(
        &self,
        id: &str,
        patch: ExperiencePatch,
    ) -> Result<Experience, ExperienceRepositoryError> {
        self.check()?;
        let mut experience = self
            .experiences
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(ExperienceRepositoryError::NotFound)?;

        if let Some(title) = patch.title {
            experience.title = title;
        }
        if let Some(company) = patch.company {
            experience.company = company;
        }
        if let Some(description) = patch.description {
            experience.description = description;
        }
        if let Some(current) = patch.current {
            experience.current = current;
        }
        experience.updated_at = Utc::now();
        Ok(experience)
    }

    async fn delete(&self, id: &str) -> Result<(), ExperienceRepositoryError> {
        self.check()?;
        if self.experiences.iter().any(|e| e.id == id) {
            Ok(())
        } else {
            Err(ExperienceRepositoryError::NotFound)
        }
    }
}

pub struct StubContentRepository {
    sections: Vec<PortfolioContent>,
    fail: bool,
}

impl StubContentRepository {
    pub fn with_sections(sections: Vec<PortfolioContent>) -> Self {
        Self {
            sections,
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self::with_sections(Vec::new())
    }

    pub fn failing() -> Self {
        Self {
            sections: Vec::new(),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), ContentRepositoryError> {
        if self.fail {
            return Err(ContentRepositoryError::DatabaseError(
                "stubbed failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for StubContentRepository {
    async fn find_all(&self) -> Result<Vec<PortfolioContent>, ContentRepositoryError> {
        self.check()?;
        Ok(self.sections.clone())
    }

    async fn find_by_section(
        &self,
        section: &str,
    ) -> Result<Option<PortfolioContent>, ContentRepositoryError> {
        self.check()?;
        Ok(self.sections.iter().find(|c| c.section == section).cloned())
    }

    async fn upsert(
        &self,
        section: &str,
        content: &str,
    ) -> Result<PortfolioContent, ContentRepositoryError> {
        self.check()?;
        Ok(PortfolioContent {
            id: self
                .sections
                .iter()
                .find(|c| c.section == section)
                .map(|c| c.id.clone())
                .unwrap_or_else(|| STUB_ID.to_string()),
            section: section.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }
}

#[derive(Clone)]
pub struct StubContactNotifier {
    pub sent: Arc<Mutex<Vec<ContactMessage>>>,
    fail: bool,
}

impl StubContactNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }
}

#[async_trait]
impl ContactNotifier for StubContactNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::DeliveryFailed("stubbed failure".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
