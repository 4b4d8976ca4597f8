use super::{CategoryCommandService, service::optional_description};
use crate::{
    application::{
        commands::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::{CategoryId, CategoryImage, CategoryName, CategoryUpdate},
};

#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    /// `Some("")` clears the description.
    pub description: Option<String>,
    pub image: Option<String>,
    pub image_public_id: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "update")?;
        let id = CategoryId::new(command.id)?;
        let category = self.load_category(id).await?;

        let mut update = CategoryUpdate::new(id, self.clock.now());

        if let Some(name) = command.name {
            let name = CategoryName::new(name)?;
            if name != category.name {
                let slug = self.claim_name(&name, Some(id)).await?;
                update = update.with_name(name, slug);
            }
        }
        if let Some(description) = command.description {
            update = update.with_description(optional_description(Some(description))?);
        }
        if let Some(image) = command.image {
            let public_id = command
                .image_public_id
                .or_else(|| category.image.public_id.clone());
            update = update.with_image(CategoryImage::new(image, public_id)?);
        }
        if let Some(is_active) = command.is_active {
            update = update.with_is_active(is_active);
        }
        if let Some(sort_order) = command.sort_order {
            update = update.with_sort_order(sort_order);
        }

        if update.is_empty() {
            return Ok(category.into());
        }

        let updated = self.category_repo.update(update).await?;
        Ok(updated.into())
    }
}
