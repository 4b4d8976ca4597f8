// src/domain/category/entity.rs
use crate::domain::admin::AdminId;
use crate::domain::category::value_objects::{
    CategoryDescription, CategoryId, CategoryImage, CategoryName, CategorySlug,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub description: Option<CategoryDescription>,
    pub image: CategoryImage,
    pub is_active: bool,
    pub sort_order: i32,
    /// Cached number of published posts in this category. Always rebuilt by
    /// a full recount, never adjusted in place.
    pub post_count: u64,
    pub created_by: AdminId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub description: Option<CategoryDescription>,
    pub image: CategoryImage,
    pub sort_order: i32,
    pub created_by: AdminId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<CategoryName>,
    pub slug: Option<CategorySlug>,
    pub description: Option<Option<CategoryDescription>>,
    pub image: Option<CategoryImage>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    pub const fn new(id: CategoryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            image: None,
            is_active: None,
            sort_order: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: CategoryName, slug: CategorySlug) -> Self {
        self.name = Some(name);
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: Option<CategoryDescription>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_image(mut self, image: CategoryImage) -> Self {
        self.image = Some(image);
        self
    }

    pub const fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub const fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.is_active.is_none()
            && self.sort_order.is_none()
    }
}
