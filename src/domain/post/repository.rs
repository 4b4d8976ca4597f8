use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostCounter, PostId, PostSlug};
use async_trait::async_trait;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSortField {
    #[default]
    CreatedAt,
    PublishedAt,
    Views,
    Likes,
    Shares,
    SortOrder,
    Title,
}

impl PostSortField {
    pub const fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::PublishedAt => "published_at",
            Self::Views => "views",
            Self::Likes => "likes",
            Self::Shares => "shares",
            Self::SortOrder => "sort_order",
            Self::Title => "title",
        }
    }
}

/// Accepts both the column name and its camelCase form (`publishedAt`).
impl FromStr for PostSortField {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            "published_at" | "publishedAt" => Ok(Self::PublishedAt),
            "views" => Ok(Self::Views),
            "likes" => Ok(Self::Likes),
            "shares" => Ok(Self::Shares),
            "sort_order" | "sortOrder" => Ok(Self::SortOrder),
            "title" => Ok(Self::Title),
            other => Err(DomainError::Validation(format!(
                "unsupported sort field '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// `1` sorts ascending; any other value sorts descending.
    pub const fn from_order(order: i32) -> Self {
        if order == 1 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Filter and page window for post listings.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category_id: Option<CategoryId>,
    pub published_only: bool,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub sort_by: PostSortField,
    pub direction: SortDirection,
    pub page: u32,
    pub limit: u32,
}

impl PostFilter {
    pub const fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.limit as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPostTally {
    pub category_id: CategoryId,
    pub category_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStatistics {
    pub total_published: u64,
    pub featured_published: u64,
    pub by_category: Vec<CategoryPostTally>,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
    /// Atomically bumps one engagement counter and returns its new value.
    async fn increment_counter(&self, id: PostId, counter: PostCounter) -> DomainResult<u64>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    async fn slug_exists(&self, slug: &PostSlug, exclude: Option<PostId>) -> DomainResult<bool>;

    async fn count_published_by_category(&self, category_id: CategoryId) -> DomainResult<u64>;
    /// Counts every post referencing the category, published or not.
    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64>;

    async fn list_page(&self, filter: PostFilter) -> DomainResult<(Vec<Post>, u64)>;
    async fn list_featured(&self, limit: u32) -> DomainResult<Vec<Post>>;
    async fn statistics(&self) -> DomainResult<PostStatistics>;
}
