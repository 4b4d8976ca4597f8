use super::{AffiliateLinkInput, PostCommandService, service::affiliate_links};
use crate::{
    application::{
        commands::{counts::resync_quietly, ensure_capability},
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::{
        category::CategoryId,
        post::{
            Hashtag, Post, PostDescription, PostId, PostImage, PostImageInput, PostTitle,
            PostUpdate, SeoMeta,
        },
    },
};

#[derive(Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<PostImageInput>>,
    pub category_id: Option<i64>,
    pub hashtags: Option<Vec<String>>,
    pub affiliate_links: Option<Vec<AffiliateLinkInput>>,
    pub publish: Option<bool>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_capability(actor, "posts", "update")?;
        let id = PostId::new(command.id)?;
        let mut post = self.load_post(id).await?;
        let previous_category = post.category_id;
        let was_published = post.is_published;

        let UpdatePostCommand {
            id: _,
            title,
            description,
            images,
            category_id,
            hashtags,
            affiliate_links: links,
            publish,
            featured,
            sort_order,
            seo_title,
            seo_description,
        } = command;

        let now = self.clock.now();
        let mut update = PostUpdate::new(id, now);

        let title = title.map(PostTitle::new).transpose()?;
        update = self.apply_title_update(&mut post, title, update).await?;

        if let Some(description) = description {
            update = update.with_description(PostDescription::new(description)?);
        }
        if let Some(images) = images {
            update = update.with_images(PostImage::gallery(&post.title, images)?);
        }
        if let Some(hashtags) = hashtags {
            update = update.with_hashtags(Hashtag::normalize_all(&hashtags)?);
        }
        if let Some(links) = links {
            update = update.with_affiliate_links(affiliate_links(links)?);
        }
        if seo_title.is_some() || seo_description.is_some() {
            let seo = SeoMeta::new(
                seo_title.or_else(|| post.seo.title.clone()),
                seo_description.or_else(|| post.seo.description.clone()),
            )?;
            update = update.with_seo(seo);
        }
        if let Some(featured) = featured {
            update = update.with_featured(featured);
        }
        if let Some(sort_order) = sort_order {
            update = update.with_sort_order(sort_order);
        }
        if let Some(category_id) = category_id {
            let category_id = self.ensure_category_exists(category_id).await?;
            if category_id != post.category_id {
                update = update.with_category(category_id);
            }
        }
        if let Some(publish) = publish {
            update = Self::apply_publish_update(actor, &mut post, publish, update)?;
        }

        let updated = self.write_repo.update(update).await?;
        self.resync_after_update(previous_category, was_published, &updated)
            .await?;
        Ok(updated.into())
    }

    /// The slug follows the title only when the title text actually changes.
    async fn apply_title_update(
        &self,
        post: &mut Post,
        title: Option<PostTitle>,
        mut update: PostUpdate,
    ) -> ApplicationResult<PostUpdate> {
        let Some(title) = title.filter(|title| *title != post.title) else {
            return Ok(update);
        };

        let slug = self
            .slug_service
            .generate_unique_slug(&title, Some(post.id))
            .await?;
        post.set_slug(slug.clone(), update.updated_at);
        post.title = title.clone();
        update = update.with_title(title).with_slug(slug);
        Ok(update)
    }

    fn apply_publish_update(
        actor: &AuthenticatedUser,
        post: &mut Post,
        publish: bool,
        mut update: PostUpdate,
    ) -> ApplicationResult<PostUpdate> {
        if publish != post.is_published {
            ensure_capability(actor, "posts", "publish")?;
            post.set_publish_state(publish, update.updated_at);
            update = update.with_publish_state(post.is_published, post.published_at);
        }

        Ok(update)
    }

    async fn resync_after_update(
        &self,
        previous_category: CategoryId,
        was_published: bool,
        updated: &Post,
    ) -> ApplicationResult<()> {
        if updated.category_id != previous_category {
            resync_quietly(&self.counts, previous_category).await?;
            resync_quietly(&self.counts, updated.category_id).await?;
        } else if updated.is_published != was_published {
            resync_quietly(&self.counts, updated.category_id).await?;
        }
        Ok(())
    }
}
