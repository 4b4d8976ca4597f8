use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::{PostCounter, PostId},
};

pub struct EngagePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn like_post(&self, command: EngagePostCommand) -> ApplicationResult<u64> {
        self.engage(command.id, PostCounter::Likes, "like").await
    }

    pub async fn share_post(&self, command: EngagePostCommand) -> ApplicationResult<u64> {
        self.engage(command.id, PostCounter::Shares, "share").await
    }

    async fn engage(&self, id: i64, counter: PostCounter, verb: &str) -> ApplicationResult<u64> {
        let id = PostId::new(id)?;
        let post = self.load_post(id).await?;
        if !post.is_published {
            return Err(ApplicationError::validation(format!(
                "cannot {verb} unpublished post"
            )));
        }

        Ok(self.write_repo.increment_counter(id, counter).await?)
    }
}
