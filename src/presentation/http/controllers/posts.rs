// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{
        AffiliateLinkInput, CreatePostCommand, DeletePostCommand, EngagePostCommand,
        SetPublishStateCommand, UpdatePostCommand,
    },
    dto::{Page, PageMeta, PostDto, PostStatsDto},
    queries::posts::{GetPostBySlugQuery, GetPostQuery, ListPostsQuery},
};
use crate::domain::post::PostImageInput;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
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
pub struct PostListParams {
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size; `0` or missing selects the default of 10.
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    /// `false` includes drafts and needs `posts:view:drafts`.
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub sort_by: Option<String>,
    /// `1` ascending, anything else descending.
    #[serde(default)]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct FeaturedParams {
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PostImageRequest {
    pub url: String,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl From<PostImageRequest> for PostImageInput {
    fn from(value: PostImageRequest) -> Self {
        Self {
            url: value.url,
            public_id: value.public_id,
            alt: value.alt,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AffiliateLinkRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl From<AffiliateLinkRequest> for AffiliateLinkInput {
    fn from(value: AffiliateLinkRequest) -> Self {
        Self {
            title: value.title,
            url: value.url,
            icon: value.icon,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    pub images: Vec<PostImageRequest>,
    pub category_id: i64,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub affiliate_links: Vec<AffiliateLinkRequest>,
    /// Missing means draft.
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<PostImageRequest>>,
    pub category_id: Option<i64>,
    pub hashtags: Option<Vec<String>>,
    pub affiliate_links: Option<Vec<AffiliateLinkRequest>>,
    pub is_published: Option<bool>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostListResponse {
    pub posts: Vec<PostDto>,
    pub count: usize,
    pub total: u64,
    pub pagination: PageMeta,
}

impl From<Page<PostDto>> for PostListResponse {
    fn from(page: Page<PostDto>) -> Self {
        Self {
            posts: page.items,
            count: page.count,
            total: page.total,
            pagination: page.pagination,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostCollectionResponse {
    pub count: usize,
    pub posts: Vec<PostDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LikeResponse {
    pub likes: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShareResponse {
    pub shares: u64,
}

#[utoipa::path(
    get,
    path = "/api/vesturo/post",
    params(PostListParams),
    responses(
        (status = 200, description = "Paged post list.", body = PostListResponse),
        (status = 400, description = "Unsupported sort field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Drafts requested without permission.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<PostListResponse>> {
    let query = ListPostsQuery {
        category_id: params.category,
        page: params.page,
        limit: params.limit,
        search: params.search,
        featured: params.featured,
        published: params.published,
        sort_by: params.sort_by,
        sort_order: params.sort_order,
    };

    state
        .services
        .post_queries
        .list_posts(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/vesturo/post/featured",
    params(FeaturedParams),
    responses(
        (status = 200, description = "Featured published posts.", body = PostCollectionResponse)
    ),
    tag = "Posts"
)]
pub async fn featured_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<FeaturedParams>,
) -> HttpResult<Json<PostCollectionResponse>> {
    let posts = state
        .services
        .post_queries
        .featured_posts(params.limit)
        .await
        .into_http()?;

    Ok(Json(PostCollectionResponse {
        count: posts.len(),
        posts,
    }))
}

#[utoipa::path(
    get,
    path = "/api/vesturo/post/stats",
    responses(
        (status = 200, description = "Aggregate statistics over published posts.", body = PostStatsDto)
    ),
    tag = "Posts"
)]
pub async fn post_stats(Extension(state): Extension<HttpState>) -> HttpResult<Json<PostStatsDto>> {
    state
        .services
        .post_queries
        .post_stats()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/vesturo/post/slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Published post.", body = PostDto),
        (status = 404, description = "Unknown or unpublished post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/vesturo/post/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post.", body = PostDto),
        (status = 404, description = "Unknown post, or a draft without permission.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post(actor.0.as_ref(), GetPostQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/vesturo/post",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid input or unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        description: payload.description,
        images: payload.images.into_iter().map(Into::into).collect(),
        category_id: payload.category_id,
        hashtags: payload.hashtags,
        affiliate_links: payload.affiliate_links.into_iter().map(Into::into).collect(),
        publish: payload.is_published,
        featured: payload.featured,
        sort_order: payload.sort_order,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/vesturo/post/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Invalid input or unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        description: payload.description,
        images: payload
            .images
            .map(|images| images.into_iter().map(Into::into).collect()),
        category_id: payload.category_id,
        hashtags: payload.hashtags,
        affiliate_links: payload
            .affiliate_links
            .map(|links| links.into_iter().map(Into::into).collect()),
        publish: payload.is_published,
        featured: payload.featured,
        sort_order: payload.sort_order,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/vesturo/post/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted.", body = StatusResponse),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("post deleted")))
}

#[utoipa::path(
    post,
    path = "/api/vesturo/post/{id}/publish",
    params(("id" = i64, Path, description = "Post id")),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Publish state applied.", body = PostDto),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_commands
        .set_publish_state(
            &user,
            SetPublishStateCommand {
                id,
                publish: payload.publish,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/vesturo/post/{id}/like",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Like recorded.", body = LikeResponse),
        (status = 400, description = "Post is not published.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn like_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<LikeResponse>> {
    state
        .services
        .post_commands
        .like_post(EngagePostCommand { id })
        .await
        .into_http()
        .map(|likes| Json(LikeResponse { likes }))
}

#[utoipa::path(
    put,
    path = "/api/vesturo/post/{id}/share",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Share recorded.", body = ShareResponse),
        (status = 400, description = "Post is not published.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn share_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ShareResponse>> {
    state
        .services
        .post_commands
        .share_post(EngagePostCommand { id })
        .await
        .into_http()
        .map(|shares| Json(ShareResponse { shares }))
}
