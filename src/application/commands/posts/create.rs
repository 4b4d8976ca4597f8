use super::{PostCommandService, service::affiliate_links};
use crate::{
    application::{
        commands::{counts::resync_quietly, ensure_capability},
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{
        Hashtag, NewPost, PostDescription, PostImage, PostImageInput, PostTitle, SeoMeta,
    },
};

#[derive(Debug, Clone)]
pub struct AffiliateLinkInput {
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
}

pub struct CreatePostCommand {
    pub title: String,
    pub description: String,
    pub images: Vec<PostImageInput>,
    pub category_id: i64,
    pub hashtags: Vec<String>,
    pub affiliate_links: Vec<AffiliateLinkInput>,
    pub publish: bool,
    pub featured: bool,
    pub sort_order: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    images: Vec<PostImageInput>,
    category_id: Option<i64>,
    hashtags: Vec<String>,
    affiliate_links: Vec<AffiliateLinkInput>,
    publish: bool,
    featured: bool,
    sort_order: i32,
    seo_title: Option<String>,
    seo_description: Option<String>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.images.push(PostImageInput {
            url: url.into(),
            ..PostImageInput::default()
        });
        self
    }

    pub fn images(mut self, images: Vec<PostImageInput>) -> Self {
        self.images = images;
        self
    }

    pub const fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn hashtags<I, S>(mut self, hashtags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashtags = hashtags.into_iter().map(Into::into).collect();
        self
    }

    pub fn affiliate_link(mut self, link: AffiliateLinkInput) -> Self {
        self.affiliate_links.push(link);
        self
    }

    pub const fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub const fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub const fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn seo(mut self, title: Option<String>, description: Option<String>) -> Self {
        self.seo_title = title;
        self.seo_description = description;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description.ok_or("description is required")?,
            images: self.images,
            category_id: self.category_id.ok_or("category is required")?,
            hashtags: self.hashtags,
            affiliate_links: self.affiliate_links,
            publish: self.publish,
            featured: self.featured,
            sort_order: self.sort_order,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_capability(actor, "posts", "create")?;
        if command.publish {
            ensure_capability(actor, "posts", "publish")?;
        }

        let title = PostTitle::new(command.title)?;
        let description = PostDescription::new(command.description)?;
        let images = PostImage::gallery(&title, command.images)?;
        let hashtags = Hashtag::normalize_all(&command.hashtags)?;
        let affiliate_links = affiliate_links(command.affiliate_links)?;
        let seo = SeoMeta::new(command.seo_title, command.seo_description)?;
        let category_id = self.ensure_category_exists(command.category_id).await?;
        let now = self.clock.now();

        let slug = self.slug_service.generate_unique_slug(&title, None).await?;

        let new_post = NewPost {
            title,
            slug,
            description,
            images,
            category_id,
            hashtags,
            affiliate_links,
            is_published: command.publish,
            published_at: command.publish.then_some(now),
            featured: command.featured,
            sort_order: command.sort_order,
            seo,
            created_by: actor.id,
            created_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        resync_quietly(&self.counts, created.category_id).await?;
        tracing::info!(post_id = %created.id, slug = %created.slug, "post created");
        Ok(created.into())
    }
}
