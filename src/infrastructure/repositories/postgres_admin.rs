// src/infrastructure/repositories/postgres_admin.rs
use super::{error::to_count, map_sqlx};
use crate::domain::admin::{
    Admin, AdminId, AdminName, AdminRepository, Email, NewAdmin, PasswordHash, Role,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const ADMIN_COLUMNS: &str =
    "id, email, name, password_hash, date_of_birth, role, is_active, last_login_at, created_at";

#[derive(Clone)]
pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: i64,
    email: String,
    name: String,
    password_hash: String,
    date_of_birth: NaiveDate,
    role: String,
    is_active: bool,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = DomainError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AdminId::new(row.id)?,
            email: Email::new(row.email)?,
            name: AdminName::new(row.name)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            date_of_birth: row.date_of_birth,
            role: row.role.parse::<Role>()?,
            is_active: row.is_active,
            last_login_at: row.last_login_at,
            created_at: row.created_at,
        })
    }
}

impl PostgresAdminRepository {
    async fn fetch_one_by(&self, column: &str, bind: AdminLookup<'_>) -> DomainResult<Option<Admin>> {
        let sql = format!("SELECT {ADMIN_COLUMNS} FROM admins WHERE {column} = $1");
        let query = sqlx::query_as::<_, AdminRow>(&sql);
        let query = match bind {
            AdminLookup::Id(id) => query.bind(id),
            AdminLookup::Email(email) => query.bind(email),
        };
        let row = query.fetch_optional(&self.pool).await.map_err(map_sqlx)?;
        row.map(Admin::try_from).transpose()
    }
}

enum AdminLookup<'a> {
    Id(i64),
    Email(&'a str),
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_admin: NewAdmin) -> DomainResult<Admin> {
        let NewAdmin {
            email,
            name,
            password_hash,
            date_of_birth,
            role,
            is_active,
            created_at,
        } = new_admin;

        let sql = format!(
            "INSERT INTO admins (email, name, password_hash, date_of_birth, role, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ADMIN_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AdminRow>(&sql)
            .bind(email.as_str())
            .bind(name.as_str())
            .bind(password_hash.as_str())
            .bind(date_of_birth)
            .bind(role.as_str())
            .bind(is_active)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Admin::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Admin>> {
        self.fetch_one_by("email", AdminLookup::Email(email.as_str()))
            .await
    }

    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<Admin>> {
        self.fetch_one_by("id", AdminLookup::Id(i64::from(id))).await
    }

    async fn record_login(&self, id: AdminId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE admins SET last_login_at = $1 WHERE id = $2")
            .bind(at)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("admin not found".into()));
        }
        Ok(())
    }

    async fn update_password(&self, id: AdminId, password_hash: PasswordHash) -> DomainResult<()> {
        let result = sqlx::query("UPDATE admins SET password_hash = $1 WHERE id = $2")
            .bind(password_hash.as_str())
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("admin not found".into()));
        }
        Ok(())
    }
}
