// src/infrastructure/repositories/postgres_post.rs
use super::{
    error::{to_bigint, to_count},
    map_sqlx,
};
use crate::domain::admin::AdminId;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AffiliateLink, CategoryPostTally, Hashtag, NewPost, Post, PostCounter, PostDescription,
    PostFilter, PostId, PostImage, PostReadRepository, PostSlug, PostStatistics, PostTitle,
    PostUpdate, PostWriteRepository, SeoMeta,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const POST_COLUMNS: &str = "id, title, slug, description, images, category_id, hashtags, \
     affiliate_links, is_published, published_at, views, likes, shares, featured, sort_order, \
     seo_title, seo_description, created_by, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    images: Json<Vec<PostImage>>,
    category_id: i64,
    hashtags: Vec<String>,
    affiliate_links: Json<Vec<AffiliateLink>>,
    is_published: bool,
    published_at: Option<DateTime<Utc>>,
    views: i64,
    likes: i64,
    shares: i64,
    featured: bool,
    sort_order: i32,
    seo_title: Option<String>,
    seo_description: Option<String>,
    created_by: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            description: PostDescription::new(row.description)?,
            images: row.images.0,
            category_id: CategoryId::new(row.category_id)?,
            hashtags: row.hashtags.into_iter().map(Hashtag::from_stored).collect(),
            affiliate_links: row.affiliate_links.0,
            is_published: row.is_published,
            published_at: row.published_at,
            views: to_count(row.views),
            likes: to_count(row.likes),
            shares: to_count(row.shares),
            featured: row.featured,
            sort_order: row.sort_order,
            seo: SeoMeta {
                title: row.seo_title,
                description: row.seo_description,
            },
            created_by: AdminId::new(row.created_by)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn hashtag_strings(tags: Vec<Hashtag>) -> Vec<String> {
    tags.into_iter().map(Hashtag::into_inner).collect()
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            description,
            images,
            category_id,
            hashtags,
            affiliate_links,
            is_published,
            published_at,
            featured,
            sort_order,
            seo,
            created_by,
            created_at,
        } = post;

        let sql = format!(
            "INSERT INTO posts (title, slug, description, images, category_id, hashtags, affiliate_links,
                                is_published, published_at, featured, sort_order, seo_title, seo_description,
                                created_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $15)
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(title.into_inner())
            .bind(slug.into_inner())
            .bind(description.into_inner())
            .bind(Json(images))
            .bind(i64::from(category_id))
            .bind(hashtag_strings(hashtags))
            .bind(Json(affiliate_links))
            .bind(is_published)
            .bind(published_at)
            .bind(featured)
            .bind(sort_order)
            .bind(seo.title)
            .bind(seo.description)
            .bind(i64::from(created_by))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            description,
            images,
            category_id,
            hashtags,
            affiliate_links,
            publish_state,
            featured,
            sort_order,
            seo,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.into_inner());
        }
        if let Some(images) = images {
            builder.push(", images = ");
            builder.push_bind(Json(images));
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(hashtags) = hashtags {
            builder.push(", hashtags = ");
            builder.push_bind(hashtag_strings(hashtags));
        }
        if let Some(links) = affiliate_links {
            builder.push(", affiliate_links = ");
            builder.push_bind(Json(links));
        }
        if let Some(state) = publish_state {
            builder.push(", is_published = ");
            builder.push_bind(state.is_published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }
        if let Some(featured) = featured {
            builder.push(", featured = ");
            builder.push_bind(featured);
        }
        if let Some(sort_order) = sort_order {
            builder.push(", sort_order = ");
            builder.push_bind(sort_order);
        }
        if let Some(seo) = seo {
            builder.push(", seo_title = ");
            builder.push_bind(seo.title);
            builder.push(", seo_description = ");
            builder.push_bind(seo.description);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }

    async fn increment_counter(&self, id: PostId, counter: PostCounter) -> DomainResult<u64> {
        let column = counter.column();
        let sql = format!(
            "UPDATE posts SET {column} = {column} + 1 WHERE id = $1 RETURNING {column}"
        );
        let value = sqlx::query_scalar::<_, i64>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        Ok(to_count(value))
    }
}

/// Escapes `LIKE` wildcards so search terms match literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl PostgresPostReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &PostFilter) {
        builder.push(" WHERE TRUE");

        if filter.published_only {
            builder.push(" AND is_published = TRUE");
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(featured) = filter.featured {
            builder.push(" AND featured = ");
            builder.push_bind(featured);
        }
        if let Some(term) = filter.search.as_deref() {
            let pattern = like_pattern(term);
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR description ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR EXISTS (SELECT 1 FROM unnest(hashtags) AS tag WHERE tag ILIKE ");
            builder.push_bind(pattern);
            builder.push("))");
        }
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &PostSlug, exclude: Option<PostId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM posts
                WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn count_published_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM posts WHERE category_id = $1 AND is_published = TRUE",
        )
        .bind(i64::from(category_id))
        .fetch_one(&self.pool)
        .await
        .map(to_count)
        .map_err(map_sqlx)
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM posts WHERE category_id = $1")
            .bind(i64::from(category_id))
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }

    async fn list_page(&self, filter: PostFilter) -> DomainResult<(Vec<Post>, u64)> {
        let limit = filter.limit.clamp(1, 100);

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM posts");
        Self::apply_filter(&mut count_builder, &filter);
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(POST_COLUMNS);
        builder.push(" FROM posts");
        Self::apply_filter(&mut builder, &filter);
        let direction = filter.direction.keyword();
        builder.push(format!(
            " ORDER BY {} {direction} NULLS LAST, id {direction}",
            filter.sort_by.column()
        ));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(to_bigint(filter.offset()));

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((posts, to_count(total)))
    }

    async fn list_featured(&self, limit: u32) -> DomainResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE is_published = TRUE AND featured = TRUE
             ORDER BY sort_order ASC, created_at DESC, id DESC
             LIMIT $1"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(limit.clamp(1, 100)))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn statistics(&self) -> DomainResult<PostStatistics> {
        let (total, featured) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(1), COUNT(1) FILTER (WHERE featured)
             FROM posts WHERE is_published = TRUE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let tallies = sqlx::query_as::<_, (i64, String, i64)>(
            "SELECT c.id, c.name, COUNT(p.id)
             FROM posts p JOIN categories c ON c.id = p.category_id
             WHERE p.is_published = TRUE
             GROUP BY c.id, c.name
             ORDER BY c.sort_order ASC, c.name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let by_category = tallies
            .into_iter()
            .map(|(id, name, count)| {
                Ok(CategoryPostTally {
                    category_id: CategoryId::new(id)?,
                    category_name: name,
                    count: to_count(count),
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(PostStatistics {
            total_published: to_count(total),
            featured_published: to_count(featured),
            by_category,
        })
    }
}
