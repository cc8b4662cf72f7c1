use chrono::{DateTime, Utc};

/// The single administrative principal.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    /// Set on bootstrap-created accounts; cleared by the first successful
    /// password change.
    pub must_change_password: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: String,
    pub password_hash: String,
    pub must_change_password: bool,
}
