mod login;
mod password;
mod register;
mod reset_password;
mod service;

pub use login::LoginAdminCommand;
pub use register::RegisterAdminCommand;
pub use reset_password::ResetPasswordCommand;
pub use service::AdminCommandService;
