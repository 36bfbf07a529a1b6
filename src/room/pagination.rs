use serde::Deserialize;

use crate::shared::AppError;

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Query string for the message history endpoint
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Validated pagination parameters. Page 0 is the most recent page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Result<Self, AppError> {
        if page < 0 {
            return Err(AppError::Validation(
                "page must be zero or greater".to_string(),
            ));
        }
        if size < 1 {
            return Err(AppError::Validation("size must be at least 1".to_string()));
        }

        Ok(Self {
            page: usize::try_from(page).unwrap_or(usize::MAX),
            size: usize::try_from(size).unwrap_or(usize::MAX),
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as usize,
            size: DEFAULT_PAGE_SIZE as usize,
        }
    }
}

impl TryFrom<PageQuery> for PageRequest {
    type Error = AppError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        Self::new(
            query.page.unwrap_or(DEFAULT_PAGE),
            query.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Returns `[start, end)` of the requested page, counted back from the newest
/// entry of an oldest-first sequence of `total` items.
pub fn page_bounds(total: usize, request: PageRequest) -> (usize, usize) {
    // Newer pages own everything after `end`, so a clamped start never
    // overlaps them.
    let end = total.saturating_sub(request.page.saturating_mul(request.size));
    let start = end.saturating_sub(request.size);
    (start, end)
}

/// Slices out one page, keeping chronological order within it
pub fn page_slice<T>(items: &[T], request: PageRequest) -> &[T] {
    let (start, end) = page_bounds(items.len(), request);
    &items[start..end]
}
