mod create;
mod delete;
mod engagement;
mod publish;
mod service;
mod update;

pub use create::{AffiliateLinkInput, CreatePostCommand, CreatePostCommandBuilder};
pub use delete::DeletePostCommand;
pub use engagement::EngagePostCommand;
pub use publish::SetPublishStateCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
