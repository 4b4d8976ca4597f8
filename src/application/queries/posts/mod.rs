mod featured;
mod get;
mod list;
mod service;
mod stats;

pub use get::{GetPostBySlugQuery, GetPostQuery};
pub use list::ListPostsQuery;
pub use service::PostQueryService;
