use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject},
        error::ApplicationResult,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
    },
    domain::admin::{Admin, AdminRepository},
};

pub struct AdminCommandService {
    pub(super) admin_repo: Arc<dyn AdminRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AdminCommandService {
    pub fn new(
        admin_repo: Arc<dyn AdminRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            admin_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    pub(super) async fn issue_token(&self, admin: &Admin) -> ApplicationResult<AuthTokenDto> {
        self.token_manager.issue(TokenSubject::from(admin)).await
    }
}
