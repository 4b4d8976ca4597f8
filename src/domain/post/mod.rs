pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate, PublishStateUpdate};
pub use repository::{
    CategoryPostTally, PostFilter, PostReadRepository, PostSortField, PostStatistics,
    PostWriteRepository, SortDirection,
};
pub use value_objects::{
    AffiliateLink, Hashtag, PostCounter, PostDescription, PostId, PostImage, PostImageInput,
    PostSlug, PostTitle, SeoMeta,
};
