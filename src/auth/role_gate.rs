use std::sync::Arc;

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::{
        domain::{User, UserRole},
        dto::response::RoleCheck,
    },
    repositories::UserRepository,
};

/// Authorize stage. Resolves the caller's role with a fresh user-store read on
/// every decision; tokens never carry roles.
pub struct RoleGate {
    users: Arc<dyn UserRepository>,
}

impl RoleGate {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Answers "does `target` hold `role`?" on behalf of `caller`.
    ///
    /// A caller asking about someone else gets a plain `false` and the store is
    /// not consulted. A target with no user record also yields `false`. Only
    /// store failures surface as errors.
    pub async fn check(&self, caller: &Claims, target: &str, role: UserRole) -> AppResult<RoleCheck> {
        if caller.identity() != target {
            log::debug!("role check for '{}' by '{}' denied: identity mismatch", target, caller.identity());
            return Ok(RoleCheck::denied(role));
        }

        let granted = self
            .users
            .find_by_email(target)
            .await?
            .is_some_and(|user| user.has_role(role));

        Ok(RoleCheck { role, granted })
    }

    /// Hard gate for privileged routes: the caller's stored record must hold
    /// `role`, otherwise `Forbidden`.
    pub async fn require(&self, caller: &Claims, role: UserRole) -> AppResult<User> {
        match self.users.find_by_email(caller.identity()).await? {
            Some(user) if user.has_role(role) => Ok(user),
            _ => Err(AppError::Forbidden(format!("{} role required", role))),
        }
    }
}
