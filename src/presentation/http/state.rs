// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Shared by every handler through `Extension`. Handlers only reach storage
/// through the application services.
#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}

impl HttpState {
    pub const fn new(services: Arc<ApplicationServices>) -> Self {
        Self { services }
    }
}
