use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::experience::application::domain::entities::{
    Experience, ExperiencePatch, NewExperience,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::store::MongoStore;

const COLLECTION: &str = "experiences";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExperienceDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    description: String,
    #[serde(default)]
    technologies: Vec<String>,
    start_date: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<DateTime>,
    #[serde(default)]
    current: bool,
    created_at: DateTime,
    updated_at: DateTime,
}

impl ExperienceDocument {
    fn from_new(new_experience: NewExperience) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            title: new_experience.title,
            company: new_experience.company,
            location: new_experience.location,
            description: new_experience.description,
            technologies: new_experience.technologies,
            start_date: DateTime::from_chrono(new_experience.start_date),
            end_date: new_experience.end_date.map(DateTime::from_chrono),
            current: new_experience.current,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<ExperienceDocument> for Experience {
    fn from(doc: ExperienceDocument) -> Self {
        Experience {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: doc.title,
            company: doc.company,
            location: doc.location,
            description: doc.description,
            technologies: doc.technologies,
            start_date: doc.start_date.to_chrono(),
            end_date: doc.end_date.map(|d| d.to_chrono()),
            current: doc.current,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

fn patch_to_document(patch: &ExperiencePatch) -> Document {
    let mut set = Document::new();
    if let Some(title) = &patch.title {
        set.insert("title", title);
    }
    if let Some(company) = &patch.company {
        set.insert("company", company);
    }
    if let Some(location) = &patch.location {
        set.insert("location", location);
    }
    if let Some(description) = &patch.description {
        set.insert("description", description);
    }
    if let Some(technologies) = &patch.technologies {
        set.insert("technologies", technologies);
    }
    if let Some(start_date) = patch.start_date {
        set.insert("startDate", DateTime::from_chrono(start_date));
    }
    if let Some(end_date) = patch.end_date {
        set.insert("endDate", DateTime::from_chrono(end_date));
    }
    if let Some(current) = patch.current {
        set.insert("current", current);
    }
    set.insert("updatedAt", DateTime::now());
    set
}

fn db_err(context: &str, e: mongodb::error::Error) -> ExperienceRepositoryError {
    error!("{context}: {e}");
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

pub struct MongoExperienceRepository {
    collection: Collection<ExperienceDocument>,
}

impl MongoExperienceRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ExperienceRepository for MongoExperienceRepository {
    async fn find_all(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "startDate": -1 })
            .await
            .map_err(|e| db_err("Failed to query experiences", e))?;

        let documents: Vec<ExperienceDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| db_err("Failed to read experience cursor", e))?;

        Ok(documents.into_iter().map(Experience::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, ExperienceRepositoryError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| db_err("Failed to look up experience", e))?;

        Ok(found.map(Experience::from))
    }

    async fn create(
        &self,
        new_experience: NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let document = ExperienceDocument::from_new(new_experience);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| db_err("Failed to insert experience", e))?;

        let mut experience = Experience::from(document);
        if let Some(id) = result.inserted_id.as_object_id() {
            experience.id = id.to_hex();
        }
        Ok(experience)
    }

    async fn update(
        &self,
        id: &str,
        patch: ExperiencePatch,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Err(ExperienceRepositoryError::NotFound);
        };

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": patch_to_document(&patch) },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| db_err("Failed to update experience", e))?;

        updated
            .map(Experience::from)
            .ok_or(ExperienceRepositoryError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), ExperienceRepositoryError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Err(ExperienceRepositoryError::NotFound);
        };

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| db_err("Failed to delete experience", e))?;

        if deleted.is_none() {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}
