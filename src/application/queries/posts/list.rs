use super::{PostQueryService, service::can_view_drafts};
use crate::{
    application::{
        dto::{AuthenticatedUser, Page, PageWindow, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        post::{PostFilter, PostSortField, SortDirection},
    },
};

pub const DEFAULT_POST_LIMIT: u32 = 10;

pub struct ListPostsQuery {
    pub category_id: Option<i64>,
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub featured: Option<bool>,
    /// `false` lists drafts and published posts together.
    pub published: bool,
    pub sort_by: Option<String>,
    pub sort_order: Option<i32>,
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self {
            category_id: None,
            page: 1,
            limit: DEFAULT_POST_LIMIT,
            search: None,
            featured: None,
            published: true,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListPostsQuery,
    ) -> ApplicationResult<Page<PostDto>> {
        if !query.published && !can_view_drafts(actor) {
            return Err(ApplicationError::forbidden(
                "missing capability posts:view:drafts",
            ));
        }

        let window = PageWindow::new(query.page, query.limit, DEFAULT_POST_LIMIT);
        let sort_by = query
            .sort_by
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(str::parse::<PostSortField>)
            .transpose()?
            .unwrap_or_default();
        let filter = PostFilter {
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            published_only: query.published,
            search: query
                .search
                .map(|term| term.trim().to_string())
                .filter(|term| !term.is_empty()),
            featured: query.featured,
            sort_by,
            direction: query
                .sort_order
                .map(SortDirection::from_order)
                .unwrap_or_default(),
            page: window.page,
            limit: window.limit,
        };

        let (records, total) = self.read_repo.list_page(filter).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, window))
    }
}
