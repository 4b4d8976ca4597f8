// src/presentation/http/controllers/mod.rs
pub mod admins;
pub mod categories;
pub mod posts;
