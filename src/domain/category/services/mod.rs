// src/domain/category/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug};
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;

/// Keeps `Category::post_count` equal to the number of published posts
/// referencing the category. Every call is a full recount; counts are never
/// adjusted by deltas.
pub struct PostCountSynchronizer {
    category_repo: Arc<dyn CategoryRepository>,
    post_repo: Arc<dyn PostReadRepository>,
}

impl PostCountSynchronizer {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        post_repo: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            category_repo,
            post_repo,
        }
    }

    /// Recounts and persists. Fails with `NotFound` when the category is gone.
    pub async fn resync(&self, id: CategoryId) -> DomainResult<u64> {
        let count = self.post_repo.count_published_by_category(id).await?;
        self.category_repo.set_post_count(id, count).await?;
        tracing::debug!(category_id = %id, post_count = count, "category post count resynced");
        Ok(count)
    }
}

/// Derives category slugs from names. Categories do not get numeric
/// suffixes; a colliding slug is rejected by the caller.
pub fn category_slug(generator: &dyn SlugGenerator, name: &CategoryName) -> DomainResult<CategorySlug> {
    let base = generator.slugify(name.as_str());
    if base.is_empty() {
        CategorySlug::new("category")
    } else {
        CategorySlug::new(base)
    }
}
