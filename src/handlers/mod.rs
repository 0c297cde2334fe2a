pub mod auth_handler;
pub mod course_handler;
pub mod selected_class_handler;
pub mod user_handler;

use std::sync::Arc;

use actix_web::web;

use crate::auth::{AuthMiddleware, JwtService};

/// Registers every route. The `/myclass` scope is guarded as a whole; the
/// protected `/users` routes verify through the `AuthenticatedUser`
/// extractor because they share paths with public ones.
pub fn configure(cfg: &mut web::ServiceConfig, jwt_service: Arc<JwtService>) {
    cfg.service(user_handler::index)
        .service(user_handler::health_check)
        .service(user_handler::readiness_check)
        .service(auth_handler::issue_token)
        .service(course_handler::get_all_courses)
        .service(course_handler::get_course)
        .service(user_handler::get_all_users)
        .service(user_handler::register_user)
        .service(user_handler::make_admin)
        .service(user_handler::make_instructor)
        .service(user_handler::check_admin)
        .service(user_handler::check_instructor)
        .service(
            web::scope("/myclass")
                .wrap(AuthMiddleware::new(jwt_service))
                .service(selected_class_handler::get_selected_classes)
                .service(selected_class_handler::select_class)
                .service(selected_class_handler::remove_selected_class),
        );
}
