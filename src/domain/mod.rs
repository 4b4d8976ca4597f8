pub mod admin;
pub mod category;
pub mod errors;
pub mod post;
