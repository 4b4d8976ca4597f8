use crate::domain::admin::{Admin, Capability, Role};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::auth::{AuthTokenDto, AuthenticatedUser};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminDto {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub is_active: bool,
    pub date_of_birth: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Admin> for AdminDto {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id.into(),
            email: admin.email.into(),
            name: admin.name.into(),
            role: admin.role,
            is_active: admin.is_active,
            date_of_birth: admin.date_of_birth,
            last_login_at: admin.last_login_at,
            created_at: admin.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResultDto {
    pub token: AuthTokenDto,
    pub admin: AdminDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CapabilityView {
    pub resource: String,
    pub action: String,
}

impl From<Capability> for CapabilityView {
    fn from(value: Capability) -> Self {
        Self {
            resource: value.resource,
            action: value.action,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminProfileDto {
    pub admin: AdminDto,
    pub capabilities: Vec<CapabilityView>,
    pub expires_at: DateTime<Utc>,
}

impl AdminProfileDto {
    pub fn from_parts(admin: Admin, auth: &AuthenticatedUser) -> Self {
        let mut capabilities: Vec<_> = auth
            .capabilities
            .iter()
            .cloned()
            .map(CapabilityView::from)
            .collect();
        capabilities.sort_by(|a, b| {
            a.resource
                .cmp(&b.resource)
                .then_with(|| a.action.cmp(&b.action))
        });

        Self {
            admin: admin.into(),
            capabilities,
            expires_at: auth.expires_at,
        }
    }
}
