use crate::domain::post::{AffiliateLink, CategoryPostTally, Hashtag, Post, PostImage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostImageDto {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    pub alt: String,
    pub is_primary: bool,
}

impl From<PostImage> for PostImageDto {
    fn from(image: PostImage) -> Self {
        Self {
            url: image.url,
            public_id: image.public_id,
            alt: image.alt,
            is_primary: image.is_primary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AffiliateLinkDto {
    pub title: String,
    pub url: String,
    pub icon: String,
}

impl From<AffiliateLink> for AffiliateLinkDto {
    fn from(link: AffiliateLink) -> Self {
        Self {
            title: link.title,
            url: link.url,
            icon: link.icon,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub images: Vec<PostImageDto>,
    pub category_id: i64,
    pub hashtags: Vec<String>,
    pub affiliate_links: Vec<AffiliateLinkDto>,
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    pub featured: bool,
    pub sort_order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            description: post.description.into_inner(),
            images: post.images.into_iter().map(Into::into).collect(),
            category_id: post.category_id.into(),
            hashtags: post.hashtags.into_iter().map(Hashtag::into_inner).collect(),
            affiliate_links: post.affiliate_links.into_iter().map(Into::into).collect(),
            is_published: post.is_published,
            published_at: post.published_at,
            views: post.views,
            likes: post.likes,
            shares: post.shares,
            featured: post.featured,
            sort_order: post.sort_order,
            seo_title: post.seo.title,
            seo_description: post.seo.description,
            created_by: post.created_by.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A count paired with its compact display form (`950`, `1.5K`, `2.0M`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattedCount {
    pub count: u64,
    pub formatted: String,
}

impl FormattedCount {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(count: u64) -> Self {
        let formatted = if count >= 1_000_000 {
            format!("{:.1}M", count as f64 / 1_000_000.0)
        } else if count >= 1_000 {
            format!("{:.1}K", count as f64 / 1_000.0)
        } else {
            count.to_string()
        };
        Self { count, formatted }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryTallyDto {
    pub category_id: i64,
    pub category_name: String,
    pub count: u64,
}

impl From<CategoryPostTally> for CategoryTallyDto {
    fn from(tally: CategoryPostTally) -> Self {
        Self {
            category_id: tally.category_id.into(),
            category_name: tally.category_name,
            count: tally.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostStatsDto {
    pub total_posts: FormattedCount,
    pub featured_posts: FormattedCount,
    pub posts_by_category: Vec<CategoryTallyDto>,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::FormattedCount;

    #[test]
    fn counts_are_abbreviated() {
        assert_eq!(FormattedCount::new(999).formatted, "999");
        assert_eq!(FormattedCount::new(1_000).formatted, "1.0K");
        assert_eq!(FormattedCount::new(1_500).formatted, "1.5K");
        assert_eq!(FormattedCount::new(2_000_000).formatted, "2.0M");
    }
}
