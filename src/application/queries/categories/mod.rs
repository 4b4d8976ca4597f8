mod get;
mod list;
mod service;

pub use get::{GetCategoryBySlugQuery, GetCategoryQuery};
pub use list::ListCategoriesQuery;
pub use service::CategoryQueryService;
