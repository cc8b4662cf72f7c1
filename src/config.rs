use std::env;

/// Process configuration. Every field is mandatory: startup fails fast when a
/// variable is missing instead of falling back to baked-in defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").expect("HOST is not set in .env file"),
            port: env::var("PORT").expect("PORT is not set in .env file"),
            mongodb_uri: env::var("MONGODB_URI").expect("MONGODB_URI is not set in .env file"),
            mongodb_database: env::var("MONGODB_DATABASE")
                .expect("MONGODB_DATABASE is not set in .env file"),
            admin_username: env::var("ADMIN_USERNAME")
                .expect("ADMIN_USERNAME is not set in .env file"),
            admin_password: env::var("ADMIN_PASSWORD")
                .expect("ADMIN_PASSWORD is not set in .env file"),
        }
    }
}
