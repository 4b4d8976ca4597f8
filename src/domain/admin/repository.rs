use crate::domain::admin::{
    entity::{Admin, NewAdmin},
    value_objects::{AdminId, Email, PasswordHash},
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_admin: NewAdmin) -> DomainResult<Admin>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Admin>>;

    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<Admin>>;

    async fn record_login(&self, id: AdminId, at: DateTime<Utc>) -> DomainResult<()>;

    async fn update_password(&self, id: AdminId, password_hash: PasswordHash) -> DomainResult<()>;
}
