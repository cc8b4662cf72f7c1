pub mod experience_repository_mongo;
