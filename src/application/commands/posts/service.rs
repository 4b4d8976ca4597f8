// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{CategoryId, CategoryRepository, services::PostCountSynchronizer},
        post::{
            AffiliateLink, Post, PostId, PostReadRepository, PostWriteRepository,
            services::PostSlugService,
        },
    },
};

use super::create::AffiliateLinkInput;

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) counts: Arc<PostCountSynchronizer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<PostSlugService>,
        counts: Arc<PostCountSynchronizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            counts,
            clock,
        }
    }

    pub(super) async fn load_post(&self, id: PostId) -> ApplicationResult<Post> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    pub(super) async fn ensure_category_exists(&self, id: i64) -> ApplicationResult<CategoryId> {
        let invalid = || ApplicationError::validation("invalid category");
        let id = CategoryId::new(id).map_err(|_| invalid())?;
        match self.category_repo.find_by_id(id).await? {
            Some(category) => Ok(category.id),
            None => Err(invalid()),
        }
    }
}

pub(super) fn affiliate_links(
    inputs: Vec<AffiliateLinkInput>,
) -> ApplicationResult<Vec<AffiliateLink>> {
    inputs
        .into_iter()
        .map(|link| AffiliateLink::new(link.title, link.url, link.icon).map_err(Into::into))
        .collect()
}
