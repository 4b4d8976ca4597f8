// tests/support/helpers.rs
use super::mocks::{
    FixedClock, MemoryAdminRepo, MemoryCategoryRepo, MemoryPostRepo, MemoryStore,
    PlainPasswordHasher, fixed_now,
};
use axum::body::{self, Body};
use axum::http::Response;
use chrono::Duration as ChronoDuration;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use vesturo::application::{
    commands::{categories::CreateCategoryCommand, posts::CreatePostCommand},
    dto::{AuthenticatedUser, CategoryDto, PostDto},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use vesturo::domain::admin::{AdminId, Capability, Role};
use vesturo::infrastructure::{security::token::BiscuitTokenManager, util::DefaultSlugGenerator};
use vesturo::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};

pub const TEST_BISCUIT_KEY: &str =
    "0101010101010101010101010101010101010101010101010101010101010101";

/// Services wired to one shared in-memory store.
pub struct TestApp {
    pub store: MemoryStore,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_slug_attempts(1000)
    }

    pub fn with_slug_attempts(max_slug_attempts: u32) -> Self {
        let store = MemoryStore::new();
        let posts = Arc::new(MemoryPostRepo(store.clone()));
        let token_manager: Arc<dyn TokenManager> = Arc::new(
            BiscuitTokenManager::new(TEST_BISCUIT_KEY, Duration::from_secs(3600))
                .expect("test biscuit key"),
        );
        let password_hasher: Arc<dyn PasswordHasher> = Arc::new(PlainPasswordHasher);
        let clock: Arc<dyn Clock> = Arc::new(FixedClock);
        let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

        let services = Arc::new(ApplicationServices::new(
            Arc::new(MemoryAdminRepo(store.clone())),
            Arc::new(MemoryCategoryRepo(store.clone())),
            posts.clone(),
            posts,
            password_hasher,
            token_manager,
            clock,
            slugger,
            max_slug_attempts,
        ));

        Self { store, services }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState::new(Arc::clone(&self.services));
        build_router_with_rate_limiter(state, false)
    }

    pub async fn category(&self, name: &str) -> CategoryDto {
        self.services
            .category_commands
            .create_category(&admin_actor(), category_command(name))
            .await
            .expect("create category")
    }

    pub async fn post(&self, title: &str, category_id: i64, publish: bool) -> PostDto {
        self.services
            .post_commands
            .create_post(&admin_actor(), post_command(title, category_id, publish))
            .await
            .expect("create post")
    }

    pub fn post_count(&self, category_id: i64) -> u64 {
        self.store
            .category(category_id)
            .expect("category exists")
            .post_count
    }
}

pub fn actor_with(role: Role, capabilities: impl IntoIterator<Item = Capability>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: AdminId::new(1).expect("admin id"),
        email: "editor@vesturo.test".into(),
        role,
        capabilities: capabilities.into_iter().collect(),
        issued_at: fixed_now(),
        expires_at: fixed_now() + ChronoDuration::hours(1),
    }
}

pub fn admin_actor() -> AuthenticatedUser {
    actor_with(Role::Admin, Role::Admin.default_capabilities())
}

/// An admin missing exactly one capability.
pub fn actor_without(resource: &str, action: &str) -> AuthenticatedUser {
    let caps = Role::Admin
        .default_capabilities()
        .into_iter()
        .filter(|cap| !cap.matches(resource, action));
    actor_with(Role::Admin, caps)
}

pub fn category_command(name: &str) -> CreateCategoryCommand {
    CreateCategoryCommand {
        name: name.into(),
        description: Some(format!("{name} looks")),
        image: "https://cdn.vesturo.test/categories/cover.jpg".into(),
        image_public_id: None,
        sort_order: 0,
    }
}

pub fn post_command(title: &str, category_id: i64, publish: bool) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .description("Layered neutrals for a mild afternoon")
        .image("https://cdn.vesturo.test/posts/look.jpg")
        .category_id(category_id)
        .hashtags(["#OOTD", "street"])
        .publish(publish)
        .build()
        .expect("valid post command")
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
