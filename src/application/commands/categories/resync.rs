use super::CategoryCommandService;
use crate::{
    application::{
        commands::{counts::resync_quietly, ensure_capability},
        dto::{AuthenticatedUser, CategoryCountDto},
        error::ApplicationResult,
    },
    domain::category::CategoryId,
};

pub struct ResyncCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn resync_category(
        &self,
        actor: &AuthenticatedUser,
        command: ResyncCategoryCommand,
    ) -> ApplicationResult<CategoryCountDto> {
        ensure_capability(actor, "categories", "resync")?;
        let id = CategoryId::new(command.id)?;
        let post_count = self.counts.resync(id).await?;
        Ok(CategoryCountDto {
            category_id: id.into(),
            post_count,
        })
    }

    /// Recounts every category. Categories deleted while the sweep runs are
    /// left out of the result.
    pub async fn resync_all_categories(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<CategoryCountDto>> {
        ensure_capability(actor, "categories", "resync")?;
        let ids = self.category_repo.list_ids().await?;
        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(post_count) = resync_quietly(&self.counts, id).await? {
                results.push(CategoryCountDto {
                    category_id: id.into(),
                    post_count,
                });
            }
        }
        tracing::info!(categories = results.len(), "post counts resynced");
        Ok(results)
    }
}
