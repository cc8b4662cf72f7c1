use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::use_cases::change_password::IChangePasswordUseCase;
use crate::modules::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::modules::contact::application::ports::outgoing::contact_notifier::ContactNotifier;
use crate::modules::content::application::ports::outgoing::content_repository::ContentRepository;
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepository;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::tests::support::stubs::{
    StubChangePassword, StubContactNotifier, StubContentRepository, StubExperienceRepository,
    StubLoginAdmin, StubProjectRepository,
};
use crate::AppState;

/// Builds an `AppState` where every collaborator defaults to an inert stub;
/// tests swap in only what they exercise.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn ILoginAdminUseCase>,
    change_password: Arc<dyn IChangePasswordUseCase>,
    project_repo: Arc<dyn ProjectRepository>,
    experience_repo: Arc<dyn ExperienceRepository>,
    content_repo: Arc<dyn ContentRepository>,
    contact_notifier: Arc<dyn ContactNotifier>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            login_admin: Arc::new(StubLoginAdmin),
            change_password: Arc::new(StubChangePassword),
            project_repo: Arc::new(StubProjectRepository::empty()),
            experience_repo: Arc::new(StubExperienceRepository::empty()),
            content_repo: Arc::new(StubContentRepository::empty()),
            contact_notifier: Arc::new(StubContactNotifier::new()),
        }
    }

    pub fn with_login_admin(mut self, login_admin: Arc<dyn ILoginAdminUseCase>) -> Self {
        self.login_admin = login_admin;
        self
    }

    pub fn with_change_password(
        mut self,
        change_password: Arc<dyn IChangePasswordUseCase>,
    ) -> Self {
        self.change_password = change_password;
        self
    }

    pub fn with_project_repo(mut self, project_repo: Arc<dyn ProjectRepository>) -> Self {
        self.project_repo = project_repo;
        self
    }

    pub fn with_experience_repo(
        mut self,
        experience_repo: Arc<dyn ExperienceRepository>,
    ) -> Self {
        self.experience_repo = experience_repo;
        self
    }

    pub fn with_content_repo(mut self, content_repo: Arc<dyn ContentRepository>) -> Self {
        self.content_repo = content_repo;
        self
    }

    pub fn with_contact_notifier(mut self, contact_notifier: Arc<dyn ContactNotifier>) -> Self {
        self.contact_notifier = contact_notifier;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin_use_case: self.login_admin,
            change_password_use_case: self.change_password,
            project_repo: self.project_repo,
            experience_repo: self.experience_repo,
            content_repo: self.content_repo,
            contact_notifier: self.contact_notifier,
        })
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
