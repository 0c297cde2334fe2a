use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::Header,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::{Claims, JwtService},
    errors::{AppError, AppResult},
};

pub const NO_CREDENTIAL: &str = "no credential supplied";

/// Verify stage: pulls the bearer token out of the `Authorization` header and
/// decodes it. A missing header, a non-`Bearer` scheme and an empty token are
/// all reported as a missing credential.
pub fn authenticate<M: HttpMessage>(msg: &M, jwt_service: &JwtService) -> AppResult<Claims> {
    let authorization = Authorization::<Bearer>::parse(msg)
        .map_err(|_| AppError::Unauthorized(NO_CREDENTIAL.to_string()))?;

    let bearer = authorization.into_scheme();
    jwt_service.validate_token(bearer.token())
}

/// Rejects every request in the wrapped scope that does not carry a valid
/// bearer token. On success the decoded [`Claims`] are stored in the request
/// extensions for [`AuthenticatedUser`].
pub struct AuthMiddleware {
    jwt_service: Arc<JwtService>,
}

impl AuthMiddleware {
    pub fn new(jwt_service: Arc<JwtService>) -> Self {
        Self { jwt_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            jwt_service: Arc::clone(&self.jwt_service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    jwt_service: Arc<JwtService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let claims = match authenticate(&req, &self.jwt_service) {
            Ok(claims) => claims,
            Err(err) => {
                log::debug!("{} {} rejected: {}", req.method(), req.path(), err);
                let res = req.error_response(err).map_into_right_body();
                return Box::pin(async move { Ok(res) });
            }
        };

        req.extensions_mut().insert(claims);

        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Extractor for the verified caller. Reads the claims left by
/// [`AuthMiddleware`]; on routes outside a guarded scope it runs the verify
/// stage itself.
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    pub fn identity(&self) -> &str {
        self.0.identity()
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        if let Some(claims) = req.extensions().get::<Claims>().cloned() {
            return ready(Ok(AuthenticatedUser(claims)));
        }

        let claims = match req.app_data::<web::Data<AppState>>() {
            Some(state) => authenticate(req, &state.jwt_service),
            None => Err(AppError::InternalError(
                "Application state not configured".to_string(),
            )),
        };

        ready(claims.map(AuthenticatedUser))
    }
}
