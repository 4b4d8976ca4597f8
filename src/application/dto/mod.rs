pub mod admins;
pub mod auth;
pub mod categories;
pub mod pagination;
pub mod posts;

pub use admins::{AdminDto, AdminProfileDto, AuthResultDto, CapabilityView};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::{CategoryCountDto, CategoryDto};
pub use pagination::{Page, PageMeta, PageWindow};
pub use posts::{
    AffiliateLinkDto, CategoryTallyDto, FormattedCount, PostDto, PostImageDto, PostStatsDto,
};
