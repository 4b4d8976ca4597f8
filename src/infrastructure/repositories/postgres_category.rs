// src/infrastructure/repositories/postgres_category.rs
use super::{
    error::{to_bigint, to_count},
    map_sqlx,
};
use crate::domain::admin::AdminId;
use crate::domain::category::{
    Category, CategoryDescription, CategoryId, CategoryImage, CategoryName, CategoryPageRequest,
    CategoryRepository, CategorySlug, CategoryUpdate, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CATEGORY_COLUMNS: &str = "id, name, slug, description, image, image_public_id, is_active, \
     sort_order, post_count, created_by, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    image: String,
    image_public_id: Option<String>,
    is_active: bool,
    sort_order: i32,
    post_count: i64,
    created_by: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: CategorySlug::new(row.slug)?,
            description: row.description.map(CategoryDescription::new).transpose()?,
            image: CategoryImage::new(row.image, row.image_public_id)?,
            is_active: row.is_active,
            sort_order: row.sort_order,
            post_count: to_count(row.post_count),
            created_by: AdminId::new(row.created_by)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            description,
            image,
            sort_order,
            created_by,
            created_at,
        } = category;

        let sql = format!(
            "INSERT INTO categories (name, slug, description, image, image_public_id, sort_order, created_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {CATEGORY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(name.into_inner())
            .bind(slug.into_inner())
            .bind(description.map(CategoryDescription::into_inner))
            .bind(image.url)
            .bind(image.public_id)
            .bind(sort_order)
            .bind(i64::from(created_by))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            name,
            slug,
            description,
            image,
            is_active,
            sort_order,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE categories SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.map(CategoryDescription::into_inner));
        }
        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image.url);
            builder.push(", image_public_id = ");
            builder.push_bind(image.public_id);
        }
        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }
        if let Some(sort_order) = sort_order {
            builder.push(", sort_order = ");
            builder.push_bind(sort_order);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(CATEGORY_COLUMNS);

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE slug = $1");
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn name_exists(&self, name: &str, exclude: Option<CategoryId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE LOWER(name) = LOWER($1) AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(name.trim())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn slug_exists(
        &self,
        slug: &CategorySlug,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_page(&self, request: CategoryPageRequest) -> DomainResult<(Vec<Category>, u64)> {
        let limit = request.limit.clamp(1, 100);
        let offset = u64::from(request.page.saturating_sub(1)) * u64::from(limit);
        let filter = if request.active_only {
            " WHERE is_active = TRUE"
        } else {
            ""
        };

        let total = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(1) FROM categories{filter}"))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let sql = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories{filter}
             ORDER BY sort_order ASC, name ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(i64::from(limit))
            .bind(to_bigint(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let categories = rows
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((categories, to_count(total)))
    }

    async fn list_ids(&self) -> DomainResult<Vec<CategoryId>> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        ids.into_iter().map(CategoryId::new).collect()
    }

    async fn set_post_count(&self, id: CategoryId, count: u64) -> DomainResult<()> {
        let result = sqlx::query("UPDATE categories SET post_count = $1 WHERE id = $2")
            .bind(to_bigint(count))
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}
