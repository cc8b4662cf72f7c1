use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::project::application::domain::entities::{NewProject, Project, ProjectPatch};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::store::MongoStore;

const COLLECTION: &str = "projects";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    long_description: Option<String>,
    technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<DateTime>,
    #[serde(default)]
    featured: bool,
    created_at: DateTime,
    updated_at: DateTime,
}

impl ProjectDocument {
    fn from_new(new_project: NewProject) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            title: new_project.title,
            description: new_project.description,
            long_description: new_project.long_description,
            technologies: new_project.technologies,
            github_url: new_project.github_url,
            live_url: new_project.live_url,
            image_url: new_project.image_url,
            start_date: new_project.start_date.map(DateTime::from_chrono),
            end_date: new_project.end_date.map(DateTime::from_chrono),
            featured: new_project.featured,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<ProjectDocument> for Project {
    fn from(doc: ProjectDocument) -> Self {
        Project {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: doc.title,
            description: doc.description,
            long_description: doc.long_description,
            technologies: doc.technologies,
            github_url: doc.github_url,
            live_url: doc.live_url,
            image_url: doc.image_url,
            start_date: doc.start_date.map(|d| d.to_chrono()),
            end_date: doc.end_date.map(|d| d.to_chrono()),
            featured: doc.featured,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

fn patch_to_document(patch: &ProjectPatch) -> Document {
    let mut set = Document::new();
    if let Some(title) = &patch.title {
        set.insert("title", title);
    }
    if let Some(description) = &patch.description {
        set.insert("description", description);
    }
    if let Some(long_description) = &patch.long_description {
        set.insert("longDescription", long_description);
    }
    if let Some(technologies) = &patch.technologies {
        set.insert("technologies", technologies);
    }
    if let Some(github_url) = &patch.github_url {
        set.insert("githubUrl", github_url);
    }
    if let Some(live_url) = &patch.live_url {
        set.insert("liveUrl", live_url);
    }
    if let Some(image_url) = &patch.image_url {
        set.insert("imageUrl", image_url);
    }
    if let Some(start_date) = patch.start_date {
        set.insert("startDate", DateTime::from_chrono(start_date));
    }
    if let Some(end_date) = patch.end_date {
        set.insert("endDate", DateTime::from_chrono(end_date));
    }
    if let Some(featured) = patch.featured {
        set.insert("featured", featured);
    }
    set.insert("updatedAt", DateTime::now());
    set
}

fn db_err(context: &str, e: mongodb::error::Error) -> ProjectRepositoryError {
    error!("{context}: {e}");
    ProjectRepositoryError::DatabaseError(e.to_string())
}

pub struct MongoProjectRepository {
    collection: Collection<ProjectDocument>,
}

impl MongoProjectRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepository {
    async fn find_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| db_err("Failed to query projects", e))?;

        let documents: Vec<ProjectDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| db_err("Failed to read project cursor", e))?;

        Ok(documents.into_iter().map(Project::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, ProjectRepositoryError> {
        // A string that is not a valid ObjectId cannot match any document.
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| db_err("Failed to look up project", e))?;

        Ok(found.map(Project::from))
    }

    async fn create(&self, new_project: NewProject) -> Result<Project, ProjectRepositoryError> {
        let document = ProjectDocument::from_new(new_project);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| db_err("Failed to insert project", e))?;

        let mut project = Project::from(document);
        if let Some(id) = result.inserted_id.as_object_id() {
            project.id = id.to_hex();
        }
        Ok(project)
    }

    async fn update(
        &self,
        id: &str,
        patch: ProjectPatch,
    ) -> Result<Project, ProjectRepositoryError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Err(ProjectRepositoryError::NotFound);
        };

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": patch_to_document(&patch) },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| db_err("Failed to update project", e))?;

        updated
            .map(Project::from)
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), ProjectRepositoryError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Err(ProjectRepositoryError::NotFound);
        };

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| db_err("Failed to delete project", e))?;

        if deleted.is_none() {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}
