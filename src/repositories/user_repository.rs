use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::{
        domain::{User, UserRole},
        dto::response::RoleUpdateResponse,
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn set_role(&self, id: ObjectId, role: UserRole) -> AppResult<RoleUpdateResponse>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

const DUPLICATE_KEY: i32 = 11000;

/// A concurrent registration can slip past the existence check; the unique
/// email index turns the loser into a duplicate-key write error.
fn map_insert_error(err: MongoError, email: &str) -> AppError {
    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error))
            if write_error.code == DUPLICATE_KEY =>
        {
            AppError::AlreadyExists(format!("user {}", email))
        }
        _ => err.into(),
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| map_insert_error(e, &user.email))?;
        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "email": email }).await?;
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn set_role(&self, id: ObjectId, role: UserRole) -> AppResult<RoleUpdateResponse> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": role.as_str() } })
            .await?;

        Ok(RoleUpdateResponse {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created unique index on users.email");

        Ok(())
    }
}
