use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::content::application::domain::entities::PortfolioContent;
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentRepository, ContentRepositoryError,
};
use crate::store::MongoStore;

const COLLECTION: &str = "portfolio-content";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    section: String,
    content: String,
    created_at: DateTime,
    updated_at: DateTime,
}

impl From<ContentDocument> for PortfolioContent {
    fn from(doc: ContentDocument) -> Self {
        PortfolioContent {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            section: doc.section,
            content: doc.content,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

fn db_err(context: &str, e: mongodb::error::Error) -> ContentRepositoryError {
    error!("{context}: {e}");
    ContentRepositoryError::DatabaseError(e.to_string())
}

pub struct MongoContentRepository {
    collection: Collection<ContentDocument>,
}

impl MongoContentRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ContentRepository for MongoContentRepository {
    async fn find_all(&self) -> Result<Vec<PortfolioContent>, ContentRepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| db_err("Failed to query content sections", e))?;

        let documents: Vec<ContentDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| db_err("Failed to read content cursor", e))?;

        Ok(documents.into_iter().map(PortfolioContent::from).collect())
    }

    async fn find_by_section(
        &self,
        section: &str,
    ) -> Result<Option<PortfolioContent>, ContentRepositoryError> {
        let found = self
            .collection
            .find_one(doc! { "section": section })
            .await
            .map_err(|e| db_err("Failed to look up content section", e))?;

        Ok(found.map(PortfolioContent::from))
    }

    async fn upsert(
        &self,
        section: &str,
        content: &str,
    ) -> Result<PortfolioContent, ContentRepositoryError> {
        let now = DateTime::now();

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "section": section },
                doc! {
                    "$set": { "section": section, "content": content, "updatedAt": now },
                    "$setOnInsert": { "createdAt": now },
                },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| db_err("Failed to upsert content section", e))?;

        // With upsert(true) and After, the driver always hands a document back.
        updated.map(PortfolioContent::from).ok_or_else(|| {
            ContentRepositoryError::DatabaseError("upsert returned no document".to_string())
        })
    }
}
