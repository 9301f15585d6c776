pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use claims::Claims;
pub use jwt::{JwtService, TokenError};
pub use middleware::{AuthMiddleware, AuthenticatedUser};
pub use password::{hash_password, verify_password, CredentialHash};
