use super::CategoryQueryService;
use crate::{
    application::{
        dto::{CategoryDto, Page, PageWindow},
        error::ApplicationResult,
    },
    domain::category::CategoryPageRequest,
};

pub const DEFAULT_CATEGORY_LIMIT: u32 = 20;

pub struct ListCategoriesQuery {
    pub active_only: bool,
    pub page: u32,
    pub limit: u32,
}

impl Default for ListCategoriesQuery {
    fn default() -> Self {
        Self {
            active_only: true,
            page: 1,
            limit: DEFAULT_CATEGORY_LIMIT,
        }
    }
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Page<CategoryDto>> {
        let window = PageWindow::new(query.page, query.limit, DEFAULT_CATEGORY_LIMIT);
        let (records, total) = self
            .category_repo
            .list_page(CategoryPageRequest {
                active_only: query.active_only,
                page: window.page,
                limit: window.limit,
            })
            .await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, window))
    }
}
