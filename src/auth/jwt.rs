use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
};

pub const INVALID_CREDENTIAL: &str = "invalid or expired credential";

/// Issues and verifies HS256 access tokens. Holds no per-token state.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            ttl: Duration::hours(expiration_hours),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn create_token(&self, identity: &str) -> AppResult<String> {
        self.create_token_at(identity, Utc::now())
    }

    /// Signs a token as if it had been issued at `issued_at`.
    pub fn create_token_at(&self, identity: &str, issued_at: DateTime<Utc>) -> AppResult<String> {
        if identity.trim().is_empty() {
            return Err(AppError::ValidationError(
                "identity claim must not be empty".to_string(),
            ));
        }
        // Signed verbatim so the verified subject is exactly what was issued.
        if identity.trim() != identity {
            return Err(AppError::ValidationError(
                "identity claim must not have surrounding whitespace".to_string(),
            ));
        }

        let claims = Claims::new(identity, issued_at, self.ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => log::debug!("rejected expired token"),
                    ErrorKind::InvalidSignature => log::debug!("rejected token with bad signature"),
                    other => log::debug!("rejected token: {:?}", other),
                }
                AppError::Unauthorized(INVALID_CREDENTIAL.to_string())
            })
    }
}
