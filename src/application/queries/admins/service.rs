use std::sync::Arc;

use crate::domain::admin::AdminRepository;

pub struct AdminQueryService {
    pub(super) admin_repo: Arc<dyn AdminRepository>,
}

impl AdminQueryService {
    pub fn new(admin_repo: Arc<dyn AdminRepository>) -> Self {
        Self { admin_repo }
    }
}
