use super::{PostQueryService, service::can_view_drafts};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostCounter, PostId, PostSlug},
};

pub struct GetPostQuery {
    pub id: i64,
}

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Drafts are only visible to admins holding `posts:view:drafts` and do
    /// not count views.
    pub async fn get_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetPostQuery,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !post.is_published {
            if can_view_drafts(actor) {
                return Ok(post.into());
            }
            return Err(ApplicationError::not_found("post not found"));
        }

        self.record_view(post).await
    }

    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(query.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.is_published)
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.record_view(post).await
    }

    async fn record_view(&self, mut post: Post) -> ApplicationResult<PostDto> {
        post.views = self
            .write_repo
            .increment_counter(post.id, PostCounter::Views)
            .await?;
        Ok(post.into())
    }
}
