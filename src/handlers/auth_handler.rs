use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::IssueTokenRequest, response::TokenResponse},
};

/// Issues an access token for the identity the client signed in with.
#[post("/jwt")]
pub async fn issue_token(
    state: web::Data<AppState>,
    request: web::Json<IssueTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let token = state.jwt_service.create_token(&request.email)?;
    log::info!("Issued access token for {}", request.email);

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
