use super::CategoryCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Deletion is guarded by a live count of referencing posts, published or
    /// not. The cached `post_count` is not consulted.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "categories", "delete")?;
        let id = CategoryId::new(command.id)?;
        self.load_category(id).await?;

        let referencing = self.post_repo.count_by_category(id).await?;
        if referencing > 0 {
            return Err(ApplicationError::conflict(format!(
                "cannot delete category. it has {referencing} posts associated with it"
            )));
        }

        self.category_repo.delete(id).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }
}
