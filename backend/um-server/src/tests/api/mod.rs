mod current_user;
mod error;
