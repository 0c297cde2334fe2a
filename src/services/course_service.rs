use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Course,
    repositories::CourseRepository,
};

pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_courses(&self) -> AppResult<Vec<Course>> {
        self.repository.find_all().await
    }

    pub async fn get_course(&self, id: &str) -> AppResult<Course> {
        let oid = ObjectId::parse_str(id)?;
        self.repository
            .find_card_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))
    }
}
