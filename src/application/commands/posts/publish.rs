use super::PostCommandService;
use crate::{
    application::{
        commands::{counts::resync_quietly, ensure_capability},
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{PostId, PostUpdate},
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl PostCommandService {
    pub async fn set_publish_state(
        &self,
        actor: &AuthenticatedUser,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_capability(actor, "posts", "publish")?;
        let id = PostId::new(command.id)?;
        let mut post = self.load_post(id).await?;

        if post.is_published == command.publish {
            return Ok(post.into());
        }

        post.set_publish_state(command.publish, self.clock.now());

        let update = PostUpdate::new(id, post.updated_at)
            .with_publish_state(post.is_published, post.published_at);
        let updated = self.write_repo.update(update).await?;
        resync_quietly(&self.counts, updated.category_id).await?;
        Ok(updated.into())
    }
}
