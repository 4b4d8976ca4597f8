use super::PostQueryService;
use crate::application::{
    dto::{FormattedCount, PostStatsDto},
    error::ApplicationResult,
};

impl PostQueryService {
    pub async fn post_stats(&self) -> ApplicationResult<PostStatsDto> {
        let stats = self.read_repo.statistics().await?;
        Ok(PostStatsDto {
            total_posts: FormattedCount::new(stats.total_published),
            featured_posts: FormattedCount::new(stats.featured_published),
            posts_by_category: stats.by_category.into_iter().map(Into::into).collect(),
            last_updated: self.clock.now(),
        })
    }
}
