use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const MIN_PRODUCTION_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub users_collection: String,
    pub instructors_collection: String,
    pub selected_class_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub production: bool,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. A missing
    /// signing secret is fatal; everything else falls back to a default.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let jwt_secret = lookup("ACCESS_TOKEN_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("ACCESS_TOKEN_SECRET must be set".to_string()))?;

        let jwt_expiration_hours = match lookup("JWT_EXPIRATION_HOURS") {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                AppError::ConfigError(format!("JWT_EXPIRATION_HOURS is not a number: {raw}"))
            })?,
            None => 1,
        };
        if jwt_expiration_hours <= 0 {
            return Err(AppError::ConfigError(
                "JWT_EXPIRATION_HOURS must be positive".to_string(),
            ));
        }

        let config = Self {
            mongo_conn_string: var("MONGO_CONN_STRING", "mongodb://localhost:27017"),
            mongo_db_name: var("MONGO_DB_NAME", "SummerSchool"),
            users_collection: var("USERS_COLLECTION", "userCollection"),
            instructors_collection: var("INSTRUCTORS_COLLECTION", "Instructors"),
            selected_class_collection: var("SELECTED_CLASS_COLLECTION", "selectedClass"),
            web_server_host: var("WEB_SERVER_HOST", "0.0.0.0"),
            web_server_port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            jwt_secret: SecretString::from(jwt_secret),
            jwt_expiration_hours,
            production: lookup("APP_ENV").is_some_and(|v| v.eq_ignore_ascii_case("production")),
        };

        if config.production {
            config.validate_for_production()?;
        }

        Ok(config)
    }

    /// Production refuses short signing secrets.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let len = self.jwt_secret.expose_secret().len();
        if len < MIN_PRODUCTION_SECRET_LEN {
            return Err(AppError::ConfigError(format!(
                "ACCESS_TOKEN_SECRET is too short ({len}). Must be at least {MIN_PRODUCTION_SECRET_LEN} characters."
            )));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "SummerSchool-test".to_string(),
            users_collection: "userCollection".to_string(),
            instructors_collection: "Instructors".to_string(),
            selected_class_collection: "selectedClass".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            production: false,
        }
    }
}
