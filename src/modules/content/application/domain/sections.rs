use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Landing block of the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsContent {
    pub title: String,
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, thiserror::Error)]
pub enum SectionValidationError {
    #[error("Invalid {section} content: {detail}")]
    InvalidShape { section: String, detail: String },

    #[error("Content must be a JSON object")]
    NotAnObject,
}

/// Content for one section, validated against the shape that section
/// requires. Sections without a declared shape accept any JSON object.
#[derive(Debug, Clone)]
pub enum SectionContent {
    Hero(HeroContent),
    About(AboutContent),
    Skills(SkillsContent),
    Custom(Value),
}

impl SectionContent {
    pub fn parse(section: &str, value: &Value) -> Result<Self, SectionValidationError> {
        if !value.is_object() {
            return Err(SectionValidationError::NotAnObject);
        }

        let shape_err = |e: serde_json::Error| SectionValidationError::InvalidShape {
            section: section.to_string(),
            detail: e.to_string(),
        };

        match section {
            "hero" => serde_json::from_value(value.clone())
                .map(SectionContent::Hero)
                .map_err(shape_err),
            "about" => serde_json::from_value(value.clone())
                .map(SectionContent::About)
                .map_err(shape_err),
            "skills" => serde_json::from_value(value.clone())
                .map(SectionContent::Skills)
                .map_err(shape_err),
            _ => Ok(SectionContent::Custom(value.clone())),
        }
    }

    /// The canonical JSON to persist. Known shapes are re-serialized, which
    /// drops unknown keys from the stored document.
    pub fn to_value(&self) -> Value {
        match self {
            SectionContent::Hero(hero) => serde_json::to_value(hero).unwrap_or_default(),
            SectionContent::About(about) => serde_json::to_value(about).unwrap_or_default(),
            SectionContent::Skills(skills) => serde_json::to_value(skills).unwrap_or_default(),
            SectionContent::Custom(value) => value.clone(),
        }
    }
}
