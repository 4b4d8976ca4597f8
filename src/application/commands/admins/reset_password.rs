use super::{AdminCommandService, password::validate_password};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::admin::{Email, PasswordHash},
};
use chrono::NaiveDate;

pub struct ResetPasswordCommand {
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub new_password: String,
    pub confirm_password: String,
}

impl AdminCommandService {
    /// Resets a password after checking the date of birth on record.
    pub async fn reset_password(&self, command: ResetPasswordCommand) -> ApplicationResult<()> {
        if command.new_password != command.confirm_password {
            return Err(ApplicationError::validation("passwords do not match"));
        }
        validate_password(&command.new_password)?;

        let email = Email::new(command.email)?;
        let admin = self
            .admin_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("no admin found with this email"))?;

        if admin.date_of_birth != command.date_of_birth {
            return Err(ApplicationError::validation("date of birth does not match"));
        }

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        self.admin_repo
            .update_password(admin.id, PasswordHash::new(hashed)?)
            .await?;
        tracing::info!(admin_id = i64::from(admin.id), "admin password reset");
        Ok(())
    }
}
