use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{SelectClassRequest, SelectedClassQuery},
};

// Mounted under the `/myclass` scope, which is wrapped in `AuthMiddleware`.

#[get("")]
pub async fn get_selected_classes(
    state: web::Data<AppState>,
    query: web::Query<SelectedClassQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let classes = state
        .selected_class_service
        .list_for(&auth.0, query.user.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(classes))
}

#[post("")]
pub async fn select_class(
    state: web::Data<AppState>,
    request: web::Json<SelectClassRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let selected = state
        .selected_class_service
        .select(&auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(selected))
}

#[delete("/{id}")]
pub async fn remove_selected_class(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state
        .selected_class_service
        .remove(&auth.0, &id)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
