use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};

use crate::{db::Database, errors::AppResult, models::domain::Course};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Course>>;
    /// Loads a single course limited to its card fields.
    async fn find_card_by_id(&self, id: ObjectId) -> AppResult<Option<Course>>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let cursor = self.collection.find(doc! {}).await?;
        let courses: Vec<Course> = cursor.try_collect().await?;
        Ok(courses)
    }

    async fn find_card_by_id(&self, id: ObjectId) -> AppResult<Option<Course>> {
        let course = self
            .collection
            .find_one(doc! { "_id": id })
            .projection(Course::card_projection())
            .await?;
        Ok(course)
    }
}
