use crate::domain::category::{Category, CategoryDescription};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_public_id: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub post_count: u64,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description.map(CategoryDescription::into_inner),
            image: category.image.url,
            image_public_id: category.image.public_id,
            is_active: category.is_active,
            sort_order: category.sort_order,
            post_count: category.post_count,
            created_by: category.created_by.into(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Result of a single recount during a bulk resync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCountDto {
    pub category_id: i64,
    pub post_count: u64,
}
