use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::auth::application::domain::entities::{Admin, NewAdmin};
use crate::modules::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError,
};
use crate::store::MongoStore;

const COLLECTION: &str = "admins";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    username: String,
    password_hash: String,
    #[serde(default)]
    must_change_password: bool,
    created_at: DateTime,
}

impl From<AdminDocument> for Admin {
    fn from(doc: AdminDocument) -> Self {
        Admin {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: doc.username,
            password_hash: doc.password_hash,
            must_change_password: doc.must_change_password,
            created_at: doc.created_at.to_chrono(),
        }
    }
}

pub struct MongoAdminRepository {
    collection: Collection<AdminDocument>,
}

impl MongoAdminRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(COLLECTION),
        }
    }
}

fn db_err(context: &str, e: mongodb::error::Error) -> AdminRepositoryError {
    error!("{context}: {e}");
    AdminRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl AdminRepository for MongoAdminRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Admin>, AdminRepositoryError> {
        let found = self
            .collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| db_err("Failed to look up admin", e))?;

        Ok(found.map(Admin::from))
    }

    async fn insert(&self, new_admin: NewAdmin) -> Result<Admin, AdminRepositoryError> {
        let document = AdminDocument {
            id: None,
            username: new_admin.username,
            password_hash: new_admin.password_hash,
            must_change_password: new_admin.must_change_password,
            created_at: DateTime::now(),
        };

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| db_err("Failed to insert admin", e))?;

        Ok(Admin {
            id: result
                .inserted_id
                .as_object_id()
                .map(|id| id.to_hex())
                .unwrap_or_default(),
            username: document.username,
            password_hash: document.password_hash,
            must_change_password: document.must_change_password,
            created_at: document.created_at.to_chrono(),
        })
    }

    async fn update_password(
        &self,
        admin_id: &str,
        password_hash: &str,
    ) -> Result<(), AdminRepositoryError> {
        let Ok(object_id) = ObjectId::parse_str(admin_id) else {
            return Err(AdminRepositoryError::NotFound);
        };

        let result = self
            .collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "passwordHash": password_hash,
                    "mustChangePassword": false,
                }},
            )
            .await
            .map_err(|e| db_err("Failed to update admin password", e))?;

        if result.matched_count == 0 {
            return Err(AdminRepositoryError::NotFound);
        }

        Ok(())
    }
}
