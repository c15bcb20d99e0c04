pub mod authenticated_user;
pub mod claims;
pub mod error;
pub mod gate;
pub mod jwt_validator;
pub mod password_hasher;
pub mod token_issuer;

pub use authenticated_user::AuthenticatedUser;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use gate::{authorize, bearer_token};
pub use jwt_validator::JwtValidator;
pub use password_hasher::{MAX_PASSWORD_BYTES, PasswordHasher};
pub use token_issuer::TokenIssuer;

#[cfg(test)]
mod tests;
