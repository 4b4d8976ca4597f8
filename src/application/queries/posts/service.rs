use std::sync::Arc;

use crate::{
    application::{dto::AuthenticatedUser, ports::time::Clock},
    domain::post::{PostReadRepository, PostWriteRepository},
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        write_repo: Arc<dyn PostWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            clock,
        }
    }
}

pub(super) fn can_view_drafts(actor: Option<&AuthenticatedUser>) -> bool {
    actor.is_some_and(|actor| actor.has_capability("posts", "view:drafts"))
}
