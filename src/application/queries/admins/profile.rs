use super::AdminQueryService;
use crate::application::{
    dto::{AdminProfileDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};

impl AdminQueryService {
    pub async fn get_profile(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<AdminProfileDto> {
        let admin = self
            .admin_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("admin not found"))?;

        Ok(AdminProfileDto::from_parts(admin, actor))
    }
}
