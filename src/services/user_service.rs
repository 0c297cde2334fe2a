use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{User, UserRole},
        dto::{
            request::RegisterUserRequest,
            response::{MessageResponse, RegistrationResponse, RoleUpdateResponse},
        },
    },
    repositories::UserRepository,
};

pub const USER_ALREADY_EXISTS: &str = "user already exists";

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Registers a user on first login. An existing email is answered with a
    /// message instead of an error and nothing is written.
    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<RegistrationResponse> {
        request.validate()?;

        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Ok(Self::already_exists());
        }

        match self.repository.create(User::from_request(request)).await {
            Ok(user) => {
                log::info!("Registered user {}", user.email);
                Ok(RegistrationResponse::Created(user))
            }
            Err(AppError::AlreadyExists(detail)) => {
                log::debug!("Lost registration race: {}", detail);
                Ok(Self::already_exists())
            }
            Err(e) => Err(e),
        }
    }

    fn already_exists() -> RegistrationResponse {
        RegistrationResponse::Existing(MessageResponse {
            message: USER_ALREADY_EXISTS.to_string(),
        })
    }

    pub async fn assign_role(&self, id: &str, role: UserRole) -> AppResult<RoleUpdateResponse> {
        let id = ObjectId::parse_str(id)?;
        let result = self.repository.set_role(id, role).await?;
        log::info!(
            "Set role '{}' on user {} (matched {}, modified {})",
            role,
            id,
            result.matched_count,
            result.modified_count
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repositories::MockUserRepository, test_utils::InMemoryUserRepository};

    fn request(email: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            name: Some("Student".to_string()),
            email: email.to_string(),
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn test_register_then_duplicate() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone());

        let first = service.register(request("s@example.com")).await.unwrap();
        assert!(matches!(first, RegistrationResponse::Created(ref u) if u.id.is_some()));

        let second = service.register(request("s@example.com")).await.unwrap();
        match second {
            RegistrationResponse::Existing(msg) => assert_eq!(msg.message, USER_ALREADY_EXISTS),
            other => panic!("Expected existing user, got {:?}", other),
        }

        assert_eq!(service.get_all_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_key_on_insert_is_existing_user() {
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_email().returning(|_| Ok(None));
        mock.expect_create()
            .times(1)
            .returning(|user| Err(AppError::AlreadyExists(format!("user {}", user.email))));

        let service = UserService::new(Arc::new(mock));
        match service.register(request("race@example.com")).await.unwrap() {
            RegistrationResponse::Existing(msg) => assert_eq!(msg.message, USER_ALREADY_EXISTS),
            other => panic!("Expected existing user, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_store_failure_propagates() {
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_email().returning(|_| Ok(None));
        mock.expect_create()
            .returning(|_| Err(AppError::DatabaseError("socket closed".to_string())));

        let service = UserService::new(Arc::new(mock));
        let result = service.register(request("down@example.com")).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_register_validates_email() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        let result = service.register(request("nope")).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_assign_role() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone());

        let created = match service.register(request("t@example.com")).await.unwrap() {
            RegistrationResponse::Created(user) => user,
            other => panic!("Expected created user, got {:?}", other),
        };
        let id = created.id.unwrap().to_hex();

        let result = service.assign_role(&id, UserRole::Instructor).await.unwrap();
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.modified_count, 1);

        let stored = repo.find_by_email("t@example.com").await.unwrap().unwrap();
        assert_eq!(stored.role, UserRole::Instructor);

        let unknown = service
            .assign_role(&ObjectId::new().to_hex(), UserRole::Admin)
            .await
            .unwrap();
        assert_eq!(unknown.matched_count, 0);
    }

    #[tokio::test]
    async fn test_assign_role_rejects_malformed_id() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        let result = service.assign_role("42", UserRole::Admin).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
