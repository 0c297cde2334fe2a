use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::dto::request::SelectClassRequest;

/// A course a student has put in their cart.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SelectedClass {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_at: Option<DateTime<Utc>>,
}

impl SelectedClass {
    /// The owner always comes from the verified caller, never the body.
    pub fn from_request(owner: &str, request: SelectClassRequest) -> Self {
        SelectedClass {
            id: None,
            user: owner.to_string(),
            course_id: request.course_id,
            title: request.title,
            teacher: request.teacher,
            course_price: request.course_price,
            image_url: request.image_url,
            selected_at: Some(Utc::now()),
        }
    }
}
