use chrono::{Duration, Utc};

use crate::modules::content::application::domain::entities::PortfolioContent;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::project::application::domain::entities::Project;

pub fn sample_project(id: &str, title: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: "A sample project".to_string(),
        long_description: None,
        technologies: vec!["Rust".to_string(), "MongoDB".to_string()],
        github_url: Some("https://github.com/janedoe/sample".to_string()),
        live_url: None,
        image_url: None,
        start_date: None,
        end_date: None,
        featured: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_experience(id: &str, title: &str) -> Experience {
    Experience {
        id: id.to_string(),
        title: title.to_string(),
        company: "Acme Corp".to_string(),
        location: Some("Remote".to_string()),
        description: "Built backend services".to_string(),
        technologies: vec!["Rust".to_string()],
        start_date: Utc::now() - Duration::days(365),
        end_date: None,
        current: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_content(id: &str, section: &str, content: serde_json::Value) -> PortfolioContent {
    PortfolioContent {
        id: id.to_string(),
        section: section.to_string(),
        content: content.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
