use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategorySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy)]
pub struct CategoryPageRequest {
    pub active_only: bool,
    pub page: u32,
    pub limit: u32,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;

    /// Case-insensitive name lookup, optionally ignoring one category.
    async fn name_exists(&self, name: &str, exclude: Option<CategoryId>) -> DomainResult<bool>;
    async fn slug_exists(
        &self,
        slug: &CategorySlug,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool>;

    /// Returns one page ordered by `sort_order`, then `name`, plus the total
    /// number of matching categories.
    async fn list_page(&self, request: CategoryPageRequest) -> DomainResult<(Vec<Category>, u64)>;
    async fn list_ids(&self) -> DomainResult<Vec<CategoryId>>;

    /// Overwrites the cached post count. Fails with `NotFound` when the
    /// category no longer exists.
    async fn set_post_count(&self, id: CategoryId, count: u64) -> DomainResult<()>;
}
