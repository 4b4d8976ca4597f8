use super::{AdminCommandService, password::validate_password};
use crate::{
    application::{
        commands::ensure_capability,
        dto::{AuthResultDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::admin::{AdminName, Email, NewAdmin, PasswordHash, Role},
};
use chrono::NaiveDate;

pub struct RegisterAdminCommand {
    pub email: String,
    pub name: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
    pub role: Option<Role>,
}

impl AdminCommandService {
    /// The very first admin becomes `super_admin` without authentication.
    /// Every later registration needs an actor holding `admins:create`.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterAdminCommand,
    ) -> ApplicationResult<AuthResultDto> {
        let email = Email::new(command.email)?;
        let name = AdminName::new(command.name)?;
        validate_password(&command.password)?;

        let existing = self.admin_repo.count().await?;
        let role = Self::determine_role(existing, actor, command.role)?;

        if existing > 0 && self.admin_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict(
                "admin with this email already exists",
            ));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_admin = NewAdmin::new(
            email,
            name,
            PasswordHash::new(hashed)?,
            command.date_of_birth,
            role,
            self.clock.now(),
        );
        let admin = self.admin_repo.insert(new_admin).await?;
        tracing::info!(admin_id = i64::from(admin.id), role = %admin.role, "admin registered");

        let token = self.issue_token(&admin).await?;
        Ok(AuthResultDto {
            token,
            admin: admin.into(),
        })
    }

    fn determine_role(
        existing: u64,
        actor: Option<&AuthenticatedUser>,
        role: Option<Role>,
    ) -> ApplicationResult<Role> {
        if existing == 0 {
            return Ok(Role::SuperAdmin);
        }
        let requester = actor
            .ok_or_else(|| ApplicationError::unauthorized("authentication required"))?;
        ensure_capability(requester, "admins", "create")?;
        Ok(role.unwrap_or_default())
    }
}
