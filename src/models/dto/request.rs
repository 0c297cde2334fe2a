use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueTokenRequest {
    #[serde(alias = "identity_claim")]
    #[validate(length(min = 1, max = 320))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(url)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectClassRequest {
    #[validate(length(min = 1, max = 64))]
    pub course_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub teacher: Option<String>,

    #[validate(range(min = 0.0))]
    pub course_price: Option<f64>,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectedClassQuery {
    pub user: Option<String>,
}
