// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admins, categories, posts},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    build_router_with_rate_limiter(state, true).layer(cors_layer(allowed_origins))
}

/// Assembles the API without CORS. The auth rate limiter keys on the peer
/// address, so callers without `ConnectInfo` should pass `false`.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let mut auth = Router::new()
        .route("/api/admin/register", post(admins::register))
        .route("/api/admin/login", post(admins::login))
        .route("/api/admin/reset-password", post(admins::reset_password));
    if rate_limited {
        if let Some(layer) = rate_limit_layer() {
            auth = auth.layer(layer);
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(auth)
        .route("/api/admin/profile", get(admins::profile))
        .route(
            "/api/vesturo/category",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/vesturo/category/resync",
            post(categories::resync_all_categories),
        )
        .route(
            "/api/vesturo/category/slug/{slug}",
            get(categories::get_category_by_slug),
        )
        .route(
            "/api/vesturo/category/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/api/vesturo/category/{id}/resync",
            post(categories::resync_category),
        )
        .route(
            "/api/vesturo/post",
            get(posts::list_posts).post(posts::create_post),
        )
        .route("/api/vesturo/post/featured", get(posts::featured_posts))
        .route("/api/vesturo/post/stats", get(posts::post_stats))
        .route("/api/vesturo/post/slug/{slug}", get(posts::get_post_by_slug))
        .route(
            "/api/vesturo/post/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/api/vesturo/post/{id}/publish",
            post(posts::set_publish_state),
        )
        .route("/api/vesturo/post/{id}/like", put(posts::like_post))
        .route("/api/vesturo/post/{id}/share", put(posts::share_post))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// An empty list or a `*` entry allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_any = origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*");

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allow_any {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse::new("ok"))
}
