use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::{
        domain::SelectedClass,
        dto::{request::SelectClassRequest, response::DeleteResponse},
    },
    repositories::SelectedClassRepository,
};

pub struct SelectedClassService {
    repository: Arc<dyn SelectedClassRepository>,
}

impl SelectedClassService {
    pub fn new(repository: Arc<dyn SelectedClassRepository>) -> Self {
        Self { repository }
    }

    /// Lists the cart of `user`. No `user` means nothing to list; asking for
    /// somebody else's cart is forbidden.
    pub async fn list_for(&self, caller: &Claims, user: Option<&str>) -> AppResult<Vec<SelectedClass>> {
        let Some(user) = user else {
            return Ok(Vec::new());
        };

        if user != caller.identity() {
            return Err(AppError::Forbidden(
                "cannot read another user's classes".to_string(),
            ));
        }

        self.repository.find_by_user(user).await
    }

    pub async fn select(&self, caller: &Claims, request: SelectClassRequest) -> AppResult<SelectedClass> {
        request.validate()?;
        let selected = SelectedClass::from_request(caller.identity(), request);
        self.repository.create(selected).await
    }

    pub async fn remove(&self, caller: &Claims, id: &str) -> AppResult<DeleteResponse> {
        let oid = ObjectId::parse_str(id)?;
        let deleted_count = self
            .repository
            .delete_for_user(oid, caller.identity())
            .await?;
        Ok(DeleteResponse { deleted_count })
    }
}
