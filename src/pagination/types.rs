//! Pagination types

use std::collections::HashMap;

/// Records per page, fixed by the Cegid API contract
pub const PAGE_SIZE: u32 = 100;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available with these query parameters
    Continue {
        /// Query parameters to add/replace
        query_params: HashMap<String, String>,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a single parameter
    pub fn with_param(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = HashMap::new();
        params.insert(key.into(), value.into());
        Self::Continue {
            query_params: params,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination state during one extraction run
///
/// Mutated only by [`super::OffsetCursor::process_page`]; the offset
/// advances monotonically and only after a non-empty page.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Current offset into the resource
    pub offset: u32,
    /// Pages fetched so far
    pub pages_fetched: u64,
    /// Total records observed so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PageState {
    /// Create a fresh state at offset 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub(crate) fn mark_done(&mut self) {
        self.done = true;
    }

    /// Record a fetched page of `count` records
    pub(crate) fn add_page(&mut self, count: usize) {
        self.pages_fetched += 1;
        self.total_fetched += count as u64;
    }

    /// Advance the offset
    pub(crate) fn add_offset(&mut self, amount: u32) {
        self.offset += amount;
    }
}
