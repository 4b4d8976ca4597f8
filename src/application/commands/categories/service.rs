// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::{
        category::{
            Category, CategoryDescription, CategoryId, CategoryName, CategoryRepository,
            CategorySlug,
            services::{PostCountSynchronizer, category_slug},
        },
        post::PostReadRepository,
    },
};

pub struct CategoryCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) counts: Arc<PostCountSynchronizer>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        counts: Arc<PostCountSynchronizer>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            post_repo,
            counts,
            slugger,
            clock,
        }
    }

    pub(super) async fn load_category(&self, id: CategoryId) -> ApplicationResult<Category> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }

    /// Names are unique case-insensitively and two distinct names may not
    /// collapse onto the same slug. Neither case is resolved automatically.
    pub(super) async fn claim_name(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> ApplicationResult<CategorySlug> {
        if self.category_repo.name_exists(name.as_str(), exclude).await? {
            return Err(ApplicationError::conflict(
                "category with this name already exists",
            ));
        }

        let slug = category_slug(self.slugger.as_ref(), name)?;
        if self.category_repo.slug_exists(&slug, exclude).await? {
            return Err(ApplicationError::conflict("category slug already exists"));
        }

        Ok(slug)
    }
}

pub(super) fn optional_description(
    value: Option<String>,
) -> ApplicationResult<Option<CategoryDescription>> {
    Ok(value
        .filter(|text| !text.trim().is_empty())
        .map(CategoryDescription::new)
        .transpose()?)
}
