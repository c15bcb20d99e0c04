#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::{create_test_user, create_test_user_at};
pub use test_db::{create_file_pool, create_test_pool};
