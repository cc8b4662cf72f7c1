pub mod entities;
pub mod sections;
