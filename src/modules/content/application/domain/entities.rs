use chrono::{DateTime, Utc};
use serde_json::Value;

/// A named block of page content. The `content` field holds the JSON document
/// as stored; its shape depends on the section name.
#[derive(Debug, Clone)]
pub struct PortfolioContent {
    pub id: String,
    pub section: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioContent {
    /// Stored content parsed back to JSON. Unparseable content degrades to an
    /// empty object rather than failing the read path.
    pub fn content_value(&self) -> Value {
        serde_json::from_str(&self.content).unwrap_or_else(|_| Value::Object(Default::default()))
    }
}
