pub mod auth;
pub mod contact;
pub mod content;
pub mod experience;
pub mod project;
