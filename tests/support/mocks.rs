// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard};
use vesturo::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{security::PasswordHasher, time::Clock},
};
use vesturo::domain::{
    admin::{Admin, AdminId, AdminRepository, Email, NewAdmin, PasswordHash},
    category::{
        Category, CategoryId, CategoryPageRequest, CategoryRepository, CategorySlug,
        CategoryUpdate, NewCategory,
    },
    errors::{DomainError, DomainResult},
    post::{
        CategoryPostTally, NewPost, Post, PostCounter, PostFilter, PostId, PostReadRepository,
        PostSlug, PostSortField, PostStatistics, PostUpdate, PostWriteRepository, SortDirection,
    },
};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2025-03-01T09:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Stores passwords as `plain:<password>` so tests avoid Argon2 cost.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/* ------------------------------------------------------------------ */

#[derive(Default)]
pub struct StoreState {
    pub admins: Vec<Admin>,
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
    next_id: i64,
    /// Number of `slug_exists` probes served, for slug loop assertions.
    pub slug_probes: u32,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// One in-memory database shared by all repository mocks.
#[derive(Clone, Default)]
pub struct MemoryStore(Arc<Mutex<StoreState>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.0.lock().expect("memory store poisoned")
    }

    pub fn category(&self, id: i64) -> Option<Category> {
        self.lock().categories.iter().find(|c| c.id.0 == id).cloned()
    }

    pub fn post(&self, id: i64) -> Option<Post> {
        self.lock().posts.iter().find(|p| p.id.0 == id).cloned()
    }

    /// Removes a category behind the services' back, bypassing the guard.
    pub fn drop_category(&self, id: i64) {
        self.lock().categories.retain(|c| c.id.0 != id);
    }

    /// Overwrites a cached count so tests can observe a full recount.
    pub fn corrupt_post_count(&self, id: i64, value: u64) {
        if let Some(category) = self.lock().categories.iter_mut().find(|c| c.id.0 == id) {
            category.post_count = value;
        }
    }

    pub fn slug_probes(&self) -> u32 {
        self.lock().slug_probes
    }

    pub fn reset_slug_probes(&self) {
        self.lock().slug_probes = 0;
    }
}

/* ------------------------------- admins ------------------------------- */

pub struct MemoryAdminRepo(pub MemoryStore);

#[async_trait]
impl AdminRepository for MemoryAdminRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.0.lock().admins.len() as u64)
    }

    async fn insert(&self, new_admin: NewAdmin) -> DomainResult<Admin> {
        let mut state = self.0.lock();
        if state.admins.iter().any(|a| a.email == new_admin.email) {
            return Err(DomainError::Conflict(
                "admin with this email already exists".into(),
            ));
        }
        let admin = Admin {
            id: AdminId::new(state.next_id())?,
            email: new_admin.email,
            name: new_admin.name,
            password_hash: new_admin.password_hash,
            date_of_birth: new_admin.date_of_birth,
            role: new_admin.role,
            is_active: new_admin.is_active,
            last_login_at: None,
            created_at: new_admin.created_at,
        };
        state.admins.push(admin.clone());
        Ok(admin)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Admin>> {
        Ok(self.0.lock().admins.iter().find(|a| &a.email == email).cloned())
    }

    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<Admin>> {
        Ok(self.0.lock().admins.iter().find(|a| a.id == id).cloned())
    }

    async fn record_login(&self, id: AdminId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut state = self.0.lock();
        let admin = state
            .admins
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound("admin not found".into()))?;
        admin.record_login(at);
        Ok(())
    }

    async fn update_password(&self, id: AdminId, password_hash: PasswordHash) -> DomainResult<()> {
        let mut state = self.0.lock();
        let admin = state
            .admins
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound("admin not found".into()))?;
        admin.set_password(password_hash);
        Ok(())
    }
}

/* ----------------------------- categories ----------------------------- */

pub struct MemoryCategoryRepo(pub MemoryStore);

#[async_trait]
impl CategoryRepository for MemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.0.lock();
        if state.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let stored = Category {
            id: CategoryId::new(state.next_id())?,
            name: category.name,
            slug: category.slug,
            description: category.description,
            image: category.image,
            is_active: true,
            sort_order: category.sort_order,
            post_count: 0,
            created_by: category.created_by,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        state.categories.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.0.lock();
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        if let Some(description) = update.description {
            category.description = description;
        }
        if let Some(image) = update.image {
            category.image = image;
        }
        if let Some(is_active) = update.is_active {
            category.is_active = is_active;
        }
        if let Some(sort_order) = update.sort_order {
            category.sort_order = sort_order;
        }
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.0.lock();
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.0.lock().categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        Ok(self
            .0
            .lock()
            .categories
            .iter()
            .find(|c| &c.slug == slug)
            .cloned())
    }

    async fn name_exists(&self, name: &str, exclude: Option<CategoryId>) -> DomainResult<bool> {
        Ok(self
            .0
            .lock()
            .categories
            .iter()
            .filter(|c| Some(c.id) != exclude)
            .any(|c| c.name.as_str().to_lowercase() == name.to_lowercase()))
    }

    async fn slug_exists(
        &self,
        slug: &CategorySlug,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool> {
        Ok(self
            .0
            .lock()
            .categories
            .iter()
            .filter(|c| Some(c.id) != exclude)
            .any(|c| &c.slug == slug))
    }

    async fn list_page(&self, request: CategoryPageRequest) -> DomainResult<(Vec<Category>, u64)> {
        let mut matching: Vec<Category> = self
            .0
            .lock()
            .categories
            .iter()
            .filter(|c| !request.active_only || c.is_active)
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.name.as_str().cmp(b.name.as_str()))
                .then_with(|| a.id.cmp(&b.id))
        });
        let total = matching.len() as u64;
        let offset = (request.page.saturating_sub(1) * request.limit) as usize;
        let items = matching
            .into_iter()
            .skip(offset)
            .take(request.limit as usize)
            .collect();
        Ok((items, total))
    }

    async fn list_ids(&self) -> DomainResult<Vec<CategoryId>> {
        Ok(self.0.lock().categories.iter().map(|c| c.id).collect())
    }

    async fn set_post_count(&self, id: CategoryId, count: u64) -> DomainResult<()> {
        let mut state = self.0.lock();
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        category.post_count = count;
        Ok(())
    }
}

/* -------------------------------- posts -------------------------------- */

pub struct MemoryPostRepo(pub MemoryStore);

fn compare_posts(a: &Post, b: &Post, field: PostSortField) -> Ordering {
    match field {
        PostSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        PostSortField::PublishedAt => a.published_at.cmp(&b.published_at),
        PostSortField::Views => a.views.cmp(&b.views),
        PostSortField::Likes => a.likes.cmp(&b.likes),
        PostSortField::Shares => a.shares.cmp(&b.shares),
        PostSortField::SortOrder => a.sort_order.cmp(&b.sort_order),
        PostSortField::Title => a.title.as_str().cmp(b.title.as_str()),
    }
    .then_with(|| a.id.cmp(&b.id))
}

fn matches_search(post: &Post, search: &str) -> bool {
    let needle = search.to_lowercase();
    post.title.as_str().to_lowercase().contains(&needle)
        || post.description.as_str().to_lowercase().contains(&needle)
        || post
            .hashtags
            .iter()
            .any(|tag| tag.as_str().contains(&needle))
}

#[async_trait]
impl PostWriteRepository for MemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.0.lock();
        if state.posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict("post slug already exists".into()));
        }
        if !state.categories.iter().any(|c| c.id == post.category_id) {
            return Err(DomainError::Validation("invalid category".into()));
        }
        let stored = Post {
            id: PostId::new(state.next_id())?,
            title: post.title,
            slug: post.slug,
            description: post.description,
            images: post.images,
            category_id: post.category_id,
            hashtags: post.hashtags,
            affiliate_links: post.affiliate_links,
            is_published: post.is_published,
            published_at: post.published_at,
            views: 0,
            likes: 0,
            shares: 0,
            featured: post.featured,
            sort_order: post.sort_order,
            seo: post.seo,
            created_by: post.created_by,
            created_at: post.created_at,
            updated_at: post.created_at,
        };
        state.posts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.0.lock();
        if let Some(slug) = &update.slug {
            if state
                .posts
                .iter()
                .any(|p| &p.slug == slug && p.id != update.id)
            {
                return Err(DomainError::Conflict("post slug already exists".into()));
            }
        }
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(description) = update.description {
            post.description = description;
        }
        if let Some(images) = update.images {
            post.images = images;
        }
        if let Some(category_id) = update.category_id {
            post.category_id = category_id;
        }
        if let Some(hashtags) = update.hashtags {
            post.hashtags = hashtags;
        }
        if let Some(links) = update.affiliate_links {
            post.affiliate_links = links;
        }
        if let Some(publish) = update.publish_state {
            post.is_published = publish.is_published;
            post.published_at = publish.published_at;
        }
        if let Some(featured) = update.featured {
            post.featured = featured;
        }
        if let Some(sort_order) = update.sort_order {
            post.sort_order = sort_order;
        }
        if let Some(seo) = update.seo {
            post.seo = seo;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.0.lock();
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }

    async fn increment_counter(&self, id: PostId, counter: PostCounter) -> DomainResult<u64> {
        let mut state = self.0.lock();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        let value = match counter {
            PostCounter::Views => &mut post.views,
            PostCounter::Likes => &mut post.likes,
            PostCounter::Shares => &mut post.shares,
        };
        *value += 1;
        Ok(*value)
    }
}

#[async_trait]
impl PostReadRepository for MemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.0.lock().posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self.0.lock().posts.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &PostSlug, exclude: Option<PostId>) -> DomainResult<bool> {
        let mut state = self.0.lock();
        state.slug_probes += 1;
        Ok(state
            .posts
            .iter()
            .filter(|p| Some(p.id) != exclude)
            .any(|p| &p.slug == slug))
    }

    async fn count_published_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        Ok(self
            .0
            .lock()
            .posts
            .iter()
            .filter(|p| p.category_id == category_id && p.is_published)
            .count() as u64)
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        Ok(self
            .0
            .lock()
            .posts
            .iter()
            .filter(|p| p.category_id == category_id)
            .count() as u64)
    }

    async fn list_page(&self, filter: PostFilter) -> DomainResult<(Vec<Post>, u64)> {
        let mut matching: Vec<Post> = self
            .0
            .lock()
            .posts
            .iter()
            .filter(|p| !filter.published_only || p.is_published)
            .filter(|p| filter.category_id.is_none_or(|id| p.category_id == id))
            .filter(|p| filter.featured.is_none_or(|featured| p.featured == featured))
            .filter(|p| {
                filter
                    .search
                    .as_deref()
                    .is_none_or(|search| matches_search(p, search))
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            let ordering = compare_posts(a, b, filter.sort_by);
            match filter.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.limit as usize)
            .collect();
        Ok((items, total))
    }

    async fn list_featured(&self, limit: u32) -> DomainResult<Vec<Post>> {
        let mut featured: Vec<Post> = self
            .0
            .lock()
            .posts
            .iter()
            .filter(|p| p.is_published && p.featured)
            .cloned()
            .collect();
        featured.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| b.id.cmp(&a.id))
        });
        featured.truncate(limit as usize);
        Ok(featured)
    }

    async fn statistics(&self) -> DomainResult<PostStatistics> {
        let state = self.0.lock();
        let published: Vec<&Post> = state.posts.iter().filter(|p| p.is_published).collect();
        let by_category = state
            .categories
            .iter()
            .filter_map(|category| {
                let count = published
                    .iter()
                    .filter(|p| p.category_id == category.id)
                    .count() as u64;
                (count > 0).then(|| CategoryPostTally {
                    category_id: category.id,
                    category_name: category.name.as_str().to_string(),
                    count,
                })
            })
            .collect();
        Ok(PostStatistics {
            total_published: published.len() as u64,
            featured_published: published.iter().filter(|p| p.featured).count() as u64,
            by_category,
        })
    }
}
