// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            admins::AdminCommandService, categories::CategoryCommandService,
            posts::PostCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            admins::AdminQueryService, categories::CategoryQueryService,
            posts::PostQueryService,
        },
    },
    domain::{
        admin::AdminRepository,
        category::{CategoryRepository, services::PostCountSynchronizer},
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
    },
};

pub struct ApplicationServices {
    pub admin_commands: Arc<AdminCommandService>,
    pub admin_queries: Arc<AdminQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        admin_repo: Arc<dyn AdminRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        max_slug_attempts: u32,
    ) -> Self {
        let admin_commands = Arc::new(AdminCommandService::new(
            Arc::clone(&admin_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let admin_queries = Arc::new(AdminQueryService::new(Arc::clone(&admin_repo)));

        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
            max_slug_attempts,
        ));
        let counts = Arc::new(PostCountSynchronizer::new(
            Arc::clone(&category_repo),
            Arc::clone(&post_read_repo),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&counts),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&category_repo),
            slug_service,
            counts,
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(
            post_read_repo,
            post_write_repo,
            clock,
        ));

        Self {
            admin_commands,
            admin_queries,
            category_commands,
            category_queries,
            post_commands,
            post_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
