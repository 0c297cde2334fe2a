use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token payload. Deliberately carries no role: roles are resolved against
/// the user store whenever a decision depends on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Identity claim (email)
    pub iat: usize,  // Issued at (as UTC timestamp)
    pub exp: usize,  // Expiration time (as UTC timestamp)
}

impl Claims {
    pub fn new(identity: &str, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let exp = issued_at + ttl;

        Self {
            sub: identity.to_string(),
            iat: issued_at.timestamp().max(0) as usize,
            exp: exp.timestamp().max(0) as usize,
        }
    }

    pub fn identity(&self) -> &str {
        &self.sub
    }
}
