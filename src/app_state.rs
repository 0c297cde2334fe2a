use std::sync::Arc;

use crate::{
    auth::{JwtService, RoleGate},
    config::Config,
    db::{Database, StoreHealth},
    errors::AppResult,
    repositories::{
        CourseRepository, MongoCourseRepository, MongoSelectedClassRepository,
        MongoUserRepository, SelectedClassRepository, UserRepository,
    },
    services::{CourseService, SelectedClassService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub jwt_service: Arc<JwtService>,
    pub role_gate: Arc<RoleGate>,
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
    pub selected_class_service: Arc<SelectedClassService>,
    pub store: Arc<dyn StoreHealth>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        log::info!("Using database '{}'", db.db_name());

        let user_repository = Arc::new(MongoUserRepository::new(&db, &config.users_collection));
        user_repository.ensure_indexes().await?;

        let course_repository =
            Arc::new(MongoCourseRepository::new(&db, &config.instructors_collection));

        let selected_class_repository = Arc::new(MongoSelectedClassRepository::new(
            &db,
            &config.selected_class_collection,
        ));
        selected_class_repository.ensure_indexes().await?;

        Ok(Self::from_repositories(
            config,
            Arc::new(db),
            user_repository,
            course_repository,
            selected_class_repository,
        ))
    }

    /// Wires services over already-constructed stores. The user store is
    /// shared by user management and the role gate.
    pub fn from_repositories(
        config: Config,
        store: Arc<dyn StoreHealth>,
        users: Arc<dyn UserRepository>,
        courses: Arc<dyn CourseRepository>,
        selected_classes: Arc<dyn SelectedClassRepository>,
    ) -> Self {
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Self {
            jwt_service,
            role_gate: Arc::new(RoleGate::new(Arc::clone(&users))),
            user_service: Arc::new(UserService::new(users)),
            course_service: Arc::new(CourseService::new(courses)),
            selected_class_service: Arc::new(SelectedClassService::new(selected_classes)),
            store,
            config: Arc::new(config),
        }
    }
}
