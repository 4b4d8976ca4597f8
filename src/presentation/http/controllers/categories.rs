// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{
        CreateCategoryCommand, DeleteCategoryCommand, ResyncCategoryCommand,
        UpdateCategoryCommand,
    },
    dto::{CategoryCountDto, CategoryDto, Page, PageMeta},
    queries::categories::{GetCategoryBySlugQuery, GetCategoryQuery, ListCategoriesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const fn default_true() -> bool {
    true
}

const fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CategoryListParams {
    /// Only active categories unless `false`.
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size; `0` or missing selects the default of 20.
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image: String,
    #[serde(default)]
    pub image_public_id: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    /// An empty string clears the description.
    pub description: Option<String>,
    pub image: Option<String>,
    pub image_public_id: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryDto>,
    pub count: usize,
    pub total: u64,
    pub pagination: PageMeta,
}

impl From<Page<CategoryDto>> for CategoryListResponse {
    fn from(page: Page<CategoryDto>) -> Self {
        Self {
            categories: page.items,
            count: page.count,
            total: page.total,
            pagination: page.pagination,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResyncAllResponse {
    pub count: usize,
    pub categories: Vec<CategoryCountDto>,
}

#[utoipa::path(
    get,
    path = "/api/vesturo/category",
    params(CategoryListParams),
    responses(
        (status = 200, description = "Paged category list.", body = CategoryListResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CategoryListParams>,
) -> HttpResult<Json<CategoryListResponse>> {
    state
        .services
        .category_queries
        .list_categories(ListCategoriesQuery {
            active_only: params.active,
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/vesturo/category/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category.", body = CategoryDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category(GetCategoryQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/vesturo/category/slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category.", body = CategoryDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/vesturo/category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name or slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let command = CreateCategoryCommand {
        name: payload.name,
        description: payload.description,
        image: payload.image,
        image_public_id: payload.image_public_id,
        sort_order: payload.sort_order,
    };

    state
        .services
        .category_commands
        .create_category(&user, command)
        .await
        .into_http()
        .map(|category| (StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/vesturo/category/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name or slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        description: payload.description,
        image: payload.image,
        image_public_id: payload.image_public_id,
        is_active: payload.is_active,
        sort_order: payload.sort_order,
    };

    state
        .services
        .category_commands
        .update_category(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/vesturo/category/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted.", body = StatusResponse),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Posts still reference the category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .category_commands
        .delete_category(&user, DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("category deleted")))
}

#[utoipa::path(
    post,
    path = "/api/vesturo/category/{id}/resync",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Post count recomputed.", body = CategoryCountDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn resync_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryCountDto>> {
    state
        .services
        .category_commands
        .resync_category(&user, ResyncCategoryCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/vesturo/category/resync",
    responses(
        (status = 200, description = "Post counts recomputed for every category.", body = ResyncAllResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn resync_all_categories(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ResyncAllResponse>> {
    let categories = state
        .services
        .category_commands
        .resync_all_categories(&user)
        .await
        .into_http()?;

    Ok(Json(ResyncAllResponse {
        count: categories.len(),
        categories,
    }))
}
