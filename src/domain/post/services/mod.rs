// src/domain/post/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

pub const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 1000;

const FALLBACK_BASE: &str = "post";

/// Domain service responsible for producing unique slugs for posts.
///
/// Collisions are resolved by appending `-1`, `-2`, ... to the base slug.
/// The number of probed candidates is capped at `max_attempts`.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    max_attempts: u32,
}

impl PostSlugService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        max_attempts: u32,
    ) -> Self {
        Self {
            read_repo,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn base_slug(&self, title: &PostTitle) -> String {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            FALLBACK_BASE.to_string()
        } else {
            base
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &PostTitle,
        exclude: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let base_slug = self.base_slug(title);
        let mut candidate = base_slug.clone();

        for counter in 1..=self.max_attempts {
            let slug = PostSlug::new(candidate)?;
            if !self.read_repo.slug_exists(&slug, exclude).await? {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
        }

        tracing::warn!(
            base = %base_slug,
            attempts = self.max_attempts,
            "slug candidates exhausted"
        );
        Err(DomainError::Conflict(format!(
            "could not allocate a unique slug for '{base_slug}' after {} attempts",
            self.max_attempts
        )))
    }
}
