pub mod list_users_query;
pub mod user;
pub mod user_update;
