mod create;
mod delete;
mod resync;
mod service;
mod update;

pub use create::CreateCategoryCommand;
pub use delete::DeleteCategoryCommand;
pub use resync::ResyncCategoryCommand;
pub use service::CategoryCommandService;
pub use update::UpdateCategoryCommand;
