//! Page window for list queries.
//!
//! Lists return every row unless the client names a page. Once either half is
//! given, the other falls back to page 1 or [`DEFAULT_PER_PAGE`].

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

/// A requested page, 1-based, with a bounded page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    per_page: u64,
}

impl Pagination {
    /// `None` when neither `page` nor `per_page` was supplied.
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Option<Self> {
        if page.is_none() && per_page.is_none() {
            return None;
        }
        Some(Self {
            page: page.map_or(1, u64::from).max(1),
            per_page: per_page.map_or(DEFAULT_PER_PAGE, u64::from).clamp(1, MAX_PER_PAGE),
        })
    }

    /// Zero-based index for SeaORM's paginator.
    pub fn index(&self) -> u64 { self.page - 1 }

    pub fn per_page(&self) -> u64 { self.per_page }
}
