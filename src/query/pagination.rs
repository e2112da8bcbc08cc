//! Page arithmetic for category listings

/// Largest accepted page size
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page size used when the client sends none
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A 1-based page request
///
/// Callers validate `page >= 1` and `1 <= page_size <= MAX_PAGE_SIZE`.
/// Arithmetic saturates, so absurd page numbers just yield empty pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: i64,
    pub page_size: i64,
}

impl Page {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Rows skipped before this page: `(page - 1) * page_size`
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Whether rows remain after this page
    pub fn has_more(&self, total: i64) -> bool {
        total > self.offset().saturating_add(self.page_size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}
