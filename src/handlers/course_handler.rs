use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/inst")]
pub async fn get_all_courses(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.get_all_courses().await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/inst/{id}")]
pub async fn get_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&id).await?;
    Ok(HttpResponse::Ok().json(course))
}
