use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::SelectedClass};

#[async_trait]
pub trait SelectedClassRepository: Send + Sync {
    async fn create(&self, selected: SelectedClass) -> AppResult<SelectedClass>;
    async fn find_by_user(&self, user: &str) -> AppResult<Vec<SelectedClass>>;
    /// Deletes the entry only when it belongs to `user`. Returns the number
    /// of removed documents.
    async fn delete_for_user(&self, id: ObjectId, user: &str) -> AppResult<u64>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoSelectedClassRepository {
    collection: Collection<SelectedClass>,
}

impl MongoSelectedClassRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl SelectedClassRepository for MongoSelectedClassRepository {
    async fn create(&self, mut selected: SelectedClass) -> AppResult<SelectedClass> {
        let result = self.collection.insert_one(&selected).await?;
        selected.id = result.inserted_id.as_object_id();
        Ok(selected)
    }

    async fn find_by_user(&self, user: &str) -> AppResult<Vec<SelectedClass>> {
        let cursor = self.collection.find(doc! { "user": user }).await?;
        let classes: Vec<SelectedClass> = cursor.try_collect().await?;
        Ok(classes)
    }

    async fn delete_for_user(&self, id: ObjectId, user: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id, "user": user })
            .await?;
        Ok(result.deleted_count)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let model = IndexModel::builder().keys(doc! { "user": 1 }).build();
        self.collection.create_index(model).await?;
        log::info!("Created index on selectedClass.user");

        Ok(())
    }
}
