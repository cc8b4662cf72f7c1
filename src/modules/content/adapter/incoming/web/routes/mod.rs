mod get_all_sections;
mod get_section;
mod upsert_section;

pub use get_all_sections::*;
pub use get_section::*;
pub use upsert_section::*;

use serde::Serialize;
use serde_json::Value;

use crate::modules::content::application::domain::entities::PortfolioContent;

/// Wire shape for a content section. Sections that were never written are
/// served as an empty object instead of a 404 so the public site can always
/// render with fallbacks.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub section: String,
    pub content: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SectionResponseDto {
    pub fn from_entity(entity: &PortfolioContent) -> Self {
        Self {
            id: Some(entity.id.clone()),
            section: entity.section.clone(),
            content: entity.content_value(),
            created_at: Some(entity.created_at),
            updated_at: Some(entity.updated_at),
        }
    }

    pub fn empty(section: &str) -> Self {
        Self {
            id: None,
            section: section.to_string(),
            content: Value::Object(Default::default()),
            created_at: None,
            updated_at: None,
        }
    }
}
