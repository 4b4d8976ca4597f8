use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_PAGE_LIMIT: u32 = 100;

/// Normalized page window: `page` starts at 1 and `limit` is clamped to
/// `1..=MAX_PAGE_LIMIT`, with zero meaning "use the default".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub limit: u32,
}

impl PageWindow {
    pub fn new(page: u32, limit: u32, default_limit: u32) -> Self {
        let limit = if limit == 0 { default_limit } else { limit };
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: usize,
    pub total: u64,
    pub pagination: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, window: PageWindow) -> Self {
        let pages = total.div_ceil(u64::from(window.limit));
        Self {
            count: items.len(),
            items,
            total,
            pagination: PageMeta {
                page: window.page,
                limit: window.limit,
                pages,
            },
        }
    }
}
