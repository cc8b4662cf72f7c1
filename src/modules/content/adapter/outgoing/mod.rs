pub mod content_repository_mongo;
