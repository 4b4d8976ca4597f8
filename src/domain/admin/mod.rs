// src/domain/admin/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Admin, NewAdmin};
pub use repository::AdminRepository;
pub use value_objects::{AdminId, AdminName, Capability, Email, PasswordHash, Role};
