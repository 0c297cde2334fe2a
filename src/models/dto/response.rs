use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::models::domain::{User, UserRole};

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RegistrationResponse {
    Created(User),
    Existing(MessageResponse),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleUpdateResponse {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteResponse {
    pub deleted_count: u64,
}

/// Outcome of a role check. Serializes as `{ "<role>": <granted> }`, e.g.
/// `{ "admin": true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCheck {
    pub role: UserRole,
    pub granted: bool,
}

impl RoleCheck {
    pub fn granted(role: UserRole) -> Self {
        Self {
            role,
            granted: true,
        }
    }

    pub fn denied(role: UserRole) -> Self {
        Self {
            role,
            granted: false,
        }
    }
}

impl Serialize for RoleCheck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.role.as_str(), &self.granted)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_check_shape() {
        let json = serde_json::to_value(RoleCheck::granted(UserRole::Admin)).unwrap();
        assert_eq!(json, serde_json::json!({ "admin": true }));

        let json = serde_json::to_value(RoleCheck::denied(UserRole::Instructor)).unwrap();
        assert_eq!(json, serde_json::json!({ "instructor": false }));
    }

    #[test]
    fn test_existing_registration_shape() {
        let response = RegistrationResponse::Existing(MessageResponse {
            message: "user already exists".to_string(),
        });
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "user already exists" }));
    }
}
