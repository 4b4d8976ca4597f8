// src/presentation/http/controllers/admins.rs
use crate::application::{
    commands::admins::{LoginAdminCommand, RegisterAdminCommand, ResetPasswordCommand},
    dto::{AdminProfileDto, AuthResultDto},
};
use crate::domain::admin::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub new_password: String,
    pub confirm_password: String,
}

#[utoipa::path(
    post,
    path = "/api/admin/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Admin registered.", body = AuthResultDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Authentication required once an admin exists.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Email already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admins"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<AuthResultDto>)> {
    let command = RegisterAdminCommand {
        email: payload.email,
        name: payload.name,
        password: payload.password,
        date_of_birth: payload.date_of_birth,
        role: payload.role,
    };

    state
        .services
        .admin_commands
        .register(actor.0.as_ref(), command)
        .await
        .into_http()
        .map(|result| (StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in.", body = AuthResultDto),
        (status = 401, description = "Invalid credentials or deactivated account.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admins"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<AuthResultDto>> {
    state
        .services
        .admin_commands
        .login(LoginAdminCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/admin/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password replaced.", body = StatusResponse),
        (status = 400, description = "Passwords differ or date of birth mismatch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown email.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admins"
)]
pub async fn reset_password(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .admin_commands
        .reset_password(ResetPasswordCommand {
            email: payload.email,
            date_of_birth: payload.date_of_birth,
            new_password: payload.new_password,
            confirm_password: payload.confirm_password,
        })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("password reset")))
}

#[utoipa::path(
    get,
    path = "/api/admin/profile",
    responses(
        (status = 200, description = "Current admin profile.", body = AdminProfileDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admins"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<AdminProfileDto>> {
    state
        .services
        .admin_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}
