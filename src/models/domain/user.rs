use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::dto::request::RegisterUserRequest;

/// Permission tier stored against a user record. Documents written before
/// roles existed have no `role` field and read back as `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    None,
    Instructor,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::None => "none",
            UserRole::Instructor => "instructor",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    pub fn new(name: &str, email: &str) -> Self {
        User {
            id: None,
            name: Some(name.to_string()),
            email: email.to_string(),
            photo_url: None,
            role: UserRole::None,
        }
    }

    pub fn from_request(request: RegisterUserRequest) -> Self {
        User {
            id: None,
            name: request.name,
            email: request.email,
            photo_url: request.photo_url,
            role: UserRole::None,
        }
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}

#[cfg(test)]
impl User {
    pub fn with_role(email: &str, role: UserRole) -> Self {
        User {
            id: Some(ObjectId::new()),
            role,
            ..User::new("Test User", email)
        }
    }
}
