use actix_web::{get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::{
        domain::UserRole,
        dto::{request::RegisterUserRequest, response::RegistrationResponse},
    },
};

#[get("/users")]
pub async fn get_all_users(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.role_gate.require(&auth.0, UserRole::Admin).await?;

    let users = state.user_service.get_all_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[post("/users")]
pub async fn register_user(
    state: web::Data<AppState>,
    request: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.register(request.into_inner()).await?;
    let mut builder = match &response {
        RegistrationResponse::Created(_) => HttpResponse::Created(),
        RegistrationResponse::Existing(_) => HttpResponse::Ok(),
    };
    Ok(builder.json(response))
}

#[patch("/users/admin/{id}")]
pub async fn make_admin(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.role_gate.require(&auth.0, UserRole::Admin).await?;

    let result = state.user_service.assign_role(&id, UserRole::Admin).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[patch("/users/instructor/{id}")]
pub async fn make_instructor(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.role_gate.require(&auth.0, UserRole::Admin).await?;

    let result = state
        .user_service
        .assign_role(&id, UserRole::Instructor)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/users/admin/{email}")]
pub async fn check_admin(
    state: web::Data<AppState>,
    email: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let check = state
        .role_gate
        .check(&auth.0, &email, UserRole::Admin)
        .await?;
    Ok(HttpResponse::Ok().json(check))
}

#[get("/users/instructor/{email}")]
pub async fn check_instructor(
    state: web::Data<AppState>,
    email: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let check = state
        .role_gate
        .check(&auth.0, &email, UserRole::Instructor)
        .await?;
    Ok(HttpResponse::Ok().json(check))
}

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Summer School is Running")
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Pings the store; 503 while it is unreachable so a balancer can hold
/// traffic back.
#[get("/health/ready")]
pub async fn readiness_check(state: web::Data<AppState>) -> HttpResponse {
    let store = state.store.ping().await;
    if let Err(e) = &store {
        log::warn!("Readiness check failed: {}", e);
    }

    let body = serde_json::json!({
        "status": if store.is_ok() { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if store.is_ok() { "ok" } else { "error" }
        }
    });

    if store.is_ok() {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
