use super::AdminCommandService;
use crate::{
    application::{
        dto::AuthResultDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::admin::Email,
};

pub struct LoginAdminCommand {
    pub email: String,
    pub password: String,
}

impl AdminCommandService {
    pub async fn login(&self, command: LoginAdminCommand) -> ApplicationResult<AuthResultDto> {
        let invalid = || ApplicationError::unauthorized("invalid credentials");
        let email = Email::new(command.email).map_err(|_| invalid())?;
        let mut admin = self
            .admin_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid)?;

        if !admin.is_active {
            return Err(ApplicationError::unauthorized("account is deactivated"));
        }

        self.password_hasher
            .verify(&command.password, admin.password_hash.as_str())
            .await?;

        let now = self.clock.now();
        self.admin_repo.record_login(admin.id, now).await?;
        admin.record_login(now);

        let token = self.issue_token(&admin).await?;
        Ok(AuthResultDto {
            token,
            admin: admin.into(),
        })
    }
}
