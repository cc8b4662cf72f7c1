use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub mod store;

#[cfg(test)]
mod tests;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::auth::adapter::outgoing::admin_repository_mongo::MongoAdminRepository;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::use_cases::bootstrap_admin::{
    BootstrapAdmin, BootstrapOutcome,
};
use crate::modules::auth::application::use_cases::change_password::{
    ChangePasswordUseCase, IChangePasswordUseCase,
};
use crate::modules::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminUseCase,
};
use crate::modules::contact::adapter::outgoing::smtp_sender::SmtpContactSender;
use crate::modules::contact::application::ports::outgoing::contact_notifier::ContactNotifier;
use crate::modules::content::adapter::outgoing::content_repository_mongo::MongoContentRepository;
use crate::modules::content::application::ports::outgoing::content_repository::ContentRepository;
use crate::modules::experience::adapter::outgoing::experience_repository_mongo::MongoExperienceRepository;
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepository;
use crate::modules::project::adapter::outgoing::project_repository_mongo::MongoProjectRepository;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::shared::api::custom_json_config;
use crate::store::MongoStore;

/// Shared handles injected into every handler.
pub struct AppState {
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase>,
    pub change_password_use_case: Arc<dyn IChangePasswordUseCase>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub experience_repo: Arc<dyn ExperienceRepository>,
    pub content_repo: Arc<dyn ContentRepository>,
    pub contact_notifier: Arc<dyn ContactNotifier>,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(health::readiness)
        .service(modules::auth::adapter::incoming::web::routes::login)
        .service(modules::auth::adapter::incoming::web::routes::change_password)
        .service(modules::auth::adapter::incoming::web::routes::verify)
        .service(modules::project::adapter::incoming::web::routes::get_projects)
        .service(modules::project::adapter::incoming::web::routes::get_single_project)
        .service(modules::project::adapter::incoming::web::routes::create_project)
        .service(modules::project::adapter::incoming::web::routes::update_project)
        .service(modules::project::adapter::incoming::web::routes::delete_project)
        .service(modules::experience::adapter::incoming::web::routes::get_experiences)
        .service(modules::experience::adapter::incoming::web::routes::get_single_experience)
        .service(modules::experience::adapter::incoming::web::routes::create_experience)
        .service(modules::experience::adapter::incoming::web::routes::update_experience)
        .service(modules::experience::adapter::incoming::web::routes::delete_experience)
        .service(modules::content::adapter::incoming::web::routes::get_all_sections)
        .service(modules::content::adapter::incoming::web::routes::get_section)
        .service(modules::content::adapter::incoming::web::routes::upsert_section)
        .service(modules::contact::adapter::incoming::web::routes::send_message);
}

#[cfg(not(tarpaulin_include))]
fn build_contact_notifier(rust_env: &str) -> Arc<dyn ContactNotifier> {
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM is not set in .env file");
    let inbox_email = env::var("CONTACT_INBOX").unwrap_or_else(|_| from_email.clone());

    if rust_env == "test" {
        return Arc::new(SmtpContactSender::new_local(from_email, inbox_email));
    }

    let server = env::var("SMTP_SERVER").expect("SMTP_SERVER is not set in .env file");
    let username = env::var("SMTP_USERNAME").expect("SMTP_USERNAME is not set in .env file");
    let password = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD is not set in .env file");

    Arc::new(
        SmtpContactSender::new(&server, &username, &password, from_email, inbox_email)
            .expect("Failed to build SMTP transport"),
    )
}

#[cfg(not(tarpaulin_include))]
#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    dotenvy::from_filename(format!(".env.{rust_env}")).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    let store = MongoStore::connect(&config.mongodb_uri, &config.mongodb_database)
        .await
        .expect("Failed to connect to MongoDB");

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()));
    let hasher = Arc::new(BcryptHasher::new());
    let admin_repo = Arc::new(MongoAdminRepository::new(&store));

    let bootstrap = BootstrapAdmin::new(admin_repo.clone(), hasher.clone());
    match bootstrap
        .ensure_admin(&config.admin_username, &config.admin_password)
        .await
    {
        Ok(BootstrapOutcome::Created) => {
            info!("Admin account created; password change required on first login")
        }
        Ok(BootstrapOutcome::AlreadyPresent) => info!("Admin account already present"),
        Err(e) => panic!("Admin bootstrap failed: {e}"),
    }

    let state = web::Data::new(AppState {
        login_admin_use_case: Arc::new(LoginAdminUseCase::new(
            admin_repo.clone(),
            hasher.clone(),
            token_provider.clone(),
        )),
        change_password_use_case: Arc::new(ChangePasswordUseCase::new(admin_repo, hasher)),
        project_repo: Arc::new(MongoProjectRepository::new(&store)),
        experience_repo: Arc::new(MongoExperienceRepository::new(&store)),
        content_repo: Arc::new(MongoContentRepository::new(&store)),
        contact_notifier: build_contact_notifier(&rust_env),
    });
    let token_data = web::Data::new(token_provider);
    let store_data = web::Data::new(store);

    let bind_addr = format!("{}:{}", config.host, config.port);
    info!(addr = %bind_addr, "Starting HTTP server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(token_data.clone())
            .app_data(store_data.clone())
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn main() -> std::io::Result<()> {
    start()
}
