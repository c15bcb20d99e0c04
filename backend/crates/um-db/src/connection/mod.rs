pub mod database_pool;
