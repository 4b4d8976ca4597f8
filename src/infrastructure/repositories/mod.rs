// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_admin;
mod postgres_category;
mod postgres_post;

pub use error::map_sqlx;
pub use postgres_admin::PostgresAdminRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
