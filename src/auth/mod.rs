pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod role_gate;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::{authenticate, AuthMiddleware, AuthenticatedUser};
pub use role_gate::RoleGate;
