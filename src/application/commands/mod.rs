pub mod admins;
mod capability;
pub mod categories;
mod counts;
pub mod posts;

pub(crate) use capability::ensure_capability;
