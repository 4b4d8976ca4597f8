use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type AuthRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Shared limiter for the unauthenticated admin endpoints (register, login,
/// password reset). Returns `None` only if the quota is misconfigured.
pub fn rate_limit_layer() -> Option<AuthRateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<AuthRateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(10);
            builder.burst_size(20);
            let layer = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .map(GovernorLayer::new);
            if layer.is_none() {
                tracing::warn!("auth rate limiter disabled: invalid quota");
            }
            layer
        })
        .clone()
}
