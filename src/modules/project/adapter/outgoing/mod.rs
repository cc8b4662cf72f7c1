pub mod project_repository_mongo;
