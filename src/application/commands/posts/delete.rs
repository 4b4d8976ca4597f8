use super::PostCommandService;
use crate::{
    application::{
        commands::{counts::resync_quietly, ensure_capability},
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "posts", "delete")?;
        let id = PostId::new(command.id)?;
        let post = self.load_post(id).await?;

        self.write_repo.delete(id).await?;
        resync_quietly(&self.counts, post.category_id).await?;
        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }
}
