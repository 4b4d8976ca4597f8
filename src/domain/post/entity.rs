// src/domain/post/entity.rs
use crate::domain::admin::AdminId;
use crate::domain::category::CategoryId;
use crate::domain::post::value_objects::{
    AffiliateLink, Hashtag, PostDescription, PostId, PostImage, PostSlug, PostTitle, SeoMeta,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub description: PostDescription,
    pub images: Vec<PostImage>,
    pub category_id: CategoryId,
    pub hashtags: Vec<Hashtag>,
    pub affiliate_links: Vec<AffiliateLink>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    pub featured: bool,
    pub sort_order: i32,
    pub seo: SeoMeta,
    pub created_by: AdminId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Publishing stamps `published_at` only the first time.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.is_published = true;
        if self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.is_published = false;
        self.updated_at = now;
    }

    pub fn set_publish_state(&mut self, publish: bool, now: DateTime<Utc>) {
        if publish {
            self.publish(now);
        } else {
            self.unpublish(now);
        }
    }

    pub fn set_slug(&mut self, slug: PostSlug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub description: PostDescription,
    pub images: Vec<PostImage>,
    pub category_id: CategoryId,
    pub hashtags: Vec<Hashtag>,
    pub affiliate_links: Vec<AffiliateLink>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub featured: bool,
    pub sort_order: i32,
    pub seo: SeoMeta,
    pub created_by: AdminId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub description: Option<PostDescription>,
    pub images: Option<Vec<PostImage>>,
    pub category_id: Option<CategoryId>,
    pub hashtags: Option<Vec<Hashtag>>,
    pub affiliate_links: Option<Vec<AffiliateLink>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub seo: Option<SeoMeta>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub const fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            images: None,
            category_id: None,
            hashtags: None,
            affiliate_links: None,
            publish_state: None,
            featured: None,
            sort_order: None,
            seo: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: PostDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_images(mut self, images: Vec<PostImage>) -> Self {
        self.images = Some(images);
        self
    }

    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_hashtags(mut self, hashtags: Vec<Hashtag>) -> Self {
        self.hashtags = Some(hashtags);
        self
    }

    pub fn with_affiliate_links(mut self, links: Vec<AffiliateLink>) -> Self {
        self.affiliate_links = Some(links);
        self
    }

    pub const fn with_publish_state(
        mut self,
        is_published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            is_published,
            published_at,
        });
        self
    }

    pub const fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub const fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn with_seo(mut self, seo: SeoMeta) -> Self {
        self.seo = Some(seo);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("Street Style").unwrap(),
            slug: PostSlug::new("street-style").unwrap(),
            description: PostDescription::new("desc").unwrap(),
            images: vec![],
            category_id: CategoryId::new(1).unwrap(),
            hashtags: vec![],
            affiliate_links: vec![],
            is_published: false,
            published_at: None,
            views: 0,
            likes: 0,
            shares: 0,
            featured: false,
            sort_order: 0,
            seo: SeoMeta::default(),
            created_by: AdminId::new(1).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn first_publish_sets_timestamp() {
        let mut post = sample_post();
        let now = Utc::now();
        post.publish(now);
        assert!(post.is_published);
        assert_eq!(post.published_at, Some(now));
    }

    #[test]
    fn republish_keeps_original_timestamp() {
        let mut post = sample_post();
        let first = Utc::now();
        post.publish(first);
        let later = first + Duration::seconds(30);
        post.unpublish(later);
        assert!(!post.is_published);
        assert_eq!(post.published_at, Some(first));
        post.publish(later + Duration::seconds(30));
        assert_eq!(post.published_at, Some(first));
    }
}
