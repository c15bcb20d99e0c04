pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::list_users_query::ListUsersQuery;
pub use models::user::User;
pub use models::user_update::UserUpdate;

#[cfg(test)]
mod tests;
