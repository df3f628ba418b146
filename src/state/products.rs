//! Product list view-state: which query is shown, whether it is loading, and
//! client-side paging.

use std::ops::Range;

use crate::error::ApiError;
use crate::models::Product;

/// What the product grid is showing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ProductQuery {
    #[default]
    All,
    /// Trimmed, non-empty search text
    Search(String),
}

impl ProductQuery {
    /// Blank input means the full catalog.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            ProductQuery::All
        } else {
            ProductQuery::Search(trimmed.to_string())
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            ProductQuery::All => "Failed to fetch products.",
            ProductQuery::Search(_) => "Failed to search products.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Handle for one in-flight load. Only the newest ticket may land.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedTicket {
    seq: u64,
    pub query: ProductQuery,
}

/// The Home page product list.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProductFeed {
    state: LoadState<Vec<Product>>,
    query: ProductQuery,
    issued: u64,
}

impl ProductFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Vec<Product>> {
        &self.state
    }

    pub fn query(&self) -> &ProductQuery {
        &self.query
    }

    /// Products currently displayed (empty unless loaded).
    pub fn products(&self) -> &[Product] {
        self.state.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Start a load; any earlier ticket becomes stale.
    pub fn begin(&mut self, query: ProductQuery) -> FeedTicket {
        self.issued += 1;
        self.query = query.clone();
        self.state = LoadState::Loading;
        FeedTicket {
            seq: self.issued,
            query,
        }
    }

    /// Land a load result. Returns `false` (and changes nothing) when the
    /// ticket was superseded by a later `begin`.
    pub fn finish(&mut self, ticket: &FeedTicket, result: Result<Vec<Product>, ApiError>) -> bool {
        if ticket.seq != self.issued {
            tracing::debug!(
                "Dropping stale product load #{} (latest #{})",
                ticket.seq,
                self.issued
            );
            return false;
        }
        self.state = match result {
            Ok(products) => LoadState::Loaded(products),
            Err(e) => LoadState::Failed(e.user_message(ticket.query.failure_message())),
        };
        true
    }
}

pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Client-side paging over the displayed list. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PAGE_SIZES[0],
        }
    }
}

impl Pager {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }

    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.page_count(total));
    }

    /// Changing the page size restarts at page 1. Zero is ignored.
    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page > 0 {
            self.per_page = per_page;
            self.page = 1;
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Page actually shown for `total` items; a page past the end is the last.
    pub fn current_page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total))
    }

    /// Index range of the current page within `total` items.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = ((self.current_page(total) - 1) * self.per_page).min(total);
        let end = (start + self.per_page).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}
