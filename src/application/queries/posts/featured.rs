use super::PostQueryService;
use crate::application::{
    dto::{PostDto, pagination::MAX_PAGE_LIMIT},
    error::ApplicationResult,
};

pub const DEFAULT_FEATURED_LIMIT: u32 = 6;

impl PostQueryService {
    pub async fn featured_posts(&self, limit: u32) -> ApplicationResult<Vec<PostDto>> {
        let limit = if limit == 0 {
            DEFAULT_FEATURED_LIMIT
        } else {
            limit.min(MAX_PAGE_LIMIT)
        };
        let posts = self.read_repo.list_featured(limit).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
