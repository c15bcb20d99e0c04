mod list_users_query;
mod user;
mod user_update;
