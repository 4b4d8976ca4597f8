use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_CATEGORY: &str = "posts_category_id_fkey";
const CNT_POST_PUBLISHED_CHECK: &str = "posts_published_requires_timestamp_chk";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_CATEGORY_NAME: &str = "categories_name_lower_key";
const CNT_ADMIN_EMAIL: &str = "admins_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::Conflict("post slug already exists".into()),
                    CNT_CATEGORY_SLUG => {
                        DomainError::Conflict("category slug already exists".into())
                    }
                    CNT_CATEGORY_NAME => {
                        DomainError::Conflict("category with this name already exists".into())
                    }
                    CNT_ADMIN_EMAIL => {
                        DomainError::Conflict("admin with this email already exists".into())
                    }
                    CNT_POST_CATEGORY => DomainError::Conflict(
                        "category is missing or still referenced by posts".into(),
                    ),
                    CNT_POST_PUBLISHED_CHECK => {
                        DomainError::Validation("published posts require published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Counters are stored as `BIGINT` and never go negative.
#[allow(clippy::cast_sign_loss)]
pub(super) const fn to_count(value: i64) -> u64 {
    if value < 0 { 0 } else { value as u64 }
}

#[allow(clippy::cast_possible_wrap)]
pub(super) const fn to_bigint(value: u64) -> i64 {
    if value > i64::MAX as u64 {
        i64::MAX
    } else {
        value as i64
    }
}
