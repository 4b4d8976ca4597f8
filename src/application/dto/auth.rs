use crate::domain::admin::{Admin, AdminId, Capability, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: AdminId,
    pub email: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub admin_id: AdminId,
    pub email: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
}

/// Tokens carry the role's default capability set as of issue time.
impl From<&Admin> for TokenSubject {
    fn from(admin: &Admin) -> Self {
        Self {
            admin_id: admin.id,
            email: admin.email.to_string(),
            role: admin.role,
            capabilities: admin.role.default_capabilities(),
        }
    }
}
