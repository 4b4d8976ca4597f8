use super::{CategoryCommandService, service::optional_description};
use crate::{
    application::{
        commands::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::{CategoryImage, CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    pub image: String,
    pub image_public_id: Option<String>,
    pub sort_order: i32,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "create")?;

        let name = CategoryName::new(command.name)?;
        let description = optional_description(command.description)?;
        let image = CategoryImage::new(command.image, command.image_public_id)?;
        let slug = self.claim_name(&name, None).await?;

        let new_category = NewCategory {
            name,
            slug,
            description,
            image,
            sort_order: command.sort_order,
            created_by: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.category_repo.insert(new_category).await?;
        tracing::info!(category_id = %created.id, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
