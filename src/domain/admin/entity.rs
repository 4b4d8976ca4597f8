// src/domain/admin/entity.rs
use crate::domain::admin::value_objects::{AdminId, AdminName, Email, PasswordHash, Role};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    pub email: Email,
    pub name: AdminName,
    pub password_hash: PasswordHash,
    pub date_of_birth: NaiveDate,
    pub role: Role,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn record_login(&mut self, now: DateTime<Utc>) {
        self.last_login_at = Some(now);
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: Email,
    pub name: AdminName,
    pub password_hash: PasswordHash,
    pub date_of_birth: NaiveDate,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewAdmin {
    pub const fn new(
        email: Email,
        name: AdminName,
        password_hash: PasswordHash,
        date_of_birth: NaiveDate,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            name,
            password_hash,
            date_of_birth,
            role,
            is_active: true,
            created_at,
        }
    }
}
