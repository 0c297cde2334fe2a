use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::{
    db::StoreHealth,
    errors::{AppError, AppResult},
    models::{
        domain::{Course, SelectedClass, User, UserRole},
        dto::response::RoleUpdateResponse,
    },
    repositories::{CourseRepository, SelectedClassRepository, UserRepository},
};

pub struct InMemoryUserRepository {
    users_by_email: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users_by_email: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, user: User) {
        self.users_by_email
            .write()
            .await
            .insert(user.email.clone(), user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users_by_email.write().await;
        if users.contains_key(&user.email) {
            return Err(AppError::AlreadyExists(format!("user {}", user.email)));
        }
        user.id.get_or_insert_with(ObjectId::new);
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users_by_email.read().await.get(email).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<_> = self.users_by_email.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    async fn set_role(&self, id: ObjectId, role: UserRole) -> AppResult<RoleUpdateResponse> {
        let mut users = self.users_by_email.write().await;
        let Some(user) = users.values_mut().find(|u| u.id == Some(id)) else {
            return Ok(RoleUpdateResponse {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let modified = user.role != role;
        user.role = role;
        Ok(RoleUpdateResponse {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryCourseRepository {
    courses: Vec<Course>,
}

impl InMemoryCourseRepository {
    pub fn with(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_all(&self) -> AppResult<Vec<Course>> {
        Ok(self.courses.clone())
    }

    async fn find_card_by_id(&self, id: ObjectId) -> AppResult<Option<Course>> {
        Ok(self.courses.iter().find(|c| c.id == Some(id)).cloned())
    }
}

pub struct InMemorySelectedClassRepository {
    classes: Arc<RwLock<Vec<SelectedClass>>>,
}

impl InMemorySelectedClassRepository {
    pub fn new() -> Self {
        Self {
            classes: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl SelectedClassRepository for InMemorySelectedClassRepository {
    async fn create(&self, mut selected: SelectedClass) -> AppResult<SelectedClass> {
        selected.id = Some(ObjectId::new());
        self.classes.write().await.push(selected.clone());
        Ok(selected)
    }

    async fn find_by_user(&self, user: &str) -> AppResult<Vec<SelectedClass>> {
        let classes = self.classes.read().await;
        Ok(classes.iter().filter(|c| c.user == user).cloned().collect())
    }

    async fn delete_for_user(&self, id: ObjectId, user: &str) -> AppResult<u64> {
        let mut classes = self.classes.write().await;
        let before = classes.len();
        classes.retain(|c| !(c.id == Some(id) && c.user == user));
        Ok((before - classes.len()) as u64)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Store health that always answers the same way.
pub struct FixedStoreHealth {
    reachable: bool,
}

impl FixedStoreHealth {
    pub fn up() -> Self {
        Self { reachable: true }
    }

    pub fn down() -> Self {
        Self { reachable: false }
    }
}

#[async_trait]
impl StoreHealth for FixedStoreHealth {
    async fn ping(&self) -> AppResult<()> {
        if self.reachable {
            Ok(())
        } else {
            Err(AppError::DatabaseError("server selection timeout".to_string()))
        }
    }
}

pub mod fixtures {
    use super::*;

    /// A course card with a fresh id.
    pub fn course(title: &str) -> Course {
        Course {
            id: Some(ObjectId::new()),
            title: Some(title.to_string()),
            description: Some(format!("{} for beginners", title)),
            teacher: Some("Test Teacher".to_string()),
            course_price: Some(49.0),
            available_seats: Some(20),
            enrolled_students: Some(4),
            image_url: None,
            course_img: None,
        }
    }

    pub fn users() -> Vec<User> {
        vec![
            User::with_role("admin@example.com", UserRole::Admin),
            User::with_role("teacher@example.com", UserRole::Instructor),
            User::with_role("student@example.com", UserRole::None),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_fixture_users_cover_every_role() {
        let users = users();
        assert_eq!(users.len(), 3);
        assert!(users.iter().any(|u| u.role == UserRole::Admin));
        assert!(users.iter().any(|u| u.role == UserRole::Instructor));
        assert!(users.iter().any(|u| u.role == UserRole::None));
    }

    #[tokio::test]
    async fn test_in_memory_set_role_reports_modification() {
        let repo = InMemoryUserRepository::new();
        let user = User::with_role("x@example.com", UserRole::Admin);
        let id = user.id.unwrap();
        repo.insert(user).await;

        let unchanged = repo.set_role(id, UserRole::Admin).await.unwrap();
        assert_eq!((unchanged.matched_count, unchanged.modified_count), (1, 0));
    }

    #[tokio::test]
    async fn test_in_memory_create_enforces_unique_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::with_role("dup@example.com", UserRole::None))
            .await
            .unwrap();

        let second = repo
            .create(User::with_role("dup@example.com", UserRole::Admin))
            .await;
        assert!(matches!(second, Err(AppError::AlreadyExists(_))));
    }
}
