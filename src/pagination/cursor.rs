//! Offset cursor

use super::types::{NextPage, PageState, PAGE_SIZE};
use std::collections::HashMap;
use std::num::NonZeroU32;

/// Offset-based page cursor
///
/// Pure state transition over [`PageState`]; performs no I/O and cannot
/// fail. The first request carries no page parameter (offset 0 is the
/// server default); every non-empty page advances the offset by the page
/// size. Only a zero-record page ends pagination.
#[derive(Debug, Clone)]
pub struct OffsetCursor {
    /// Query parameter carrying the offset
    page_param: String,
    /// Records per page
    page_size: u32,
}

impl Default for OffsetCursor {
    fn default() -> Self {
        Self {
            page_param: "page".to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

impl OffsetCursor {
    /// Create a cursor with the Cegid defaults (`page`, size 100)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cursor with a custom parameter name and page size
    ///
    /// The page size must be nonzero: a zero advance would re-request the
    /// same offset forever on any nonempty page.
    pub fn with_page_size(page_param: impl Into<String>, page_size: NonZeroU32) -> Self {
        Self {
            page_param: page_param.into(),
            page_size: page_size.get(),
        }
    }

    /// Query parameters for the next request
    ///
    /// Empty on the first page: the offset parameter is omitted until a
    /// page has been fetched.
    pub fn query_params(&self, state: &PageState) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if state.offset > 0 {
            params.insert(self.page_param.clone(), state.offset.to_string());
        }
        params
    }

    /// Process a fetched page and decide whether another fetch is needed
    ///
    /// `records_count` is the raw decoded record count, before any
    /// post-processing drops records. A short page still continues; the
    /// follow-up fetch is expected to return zero records and end the run.
    pub fn process_page(&self, records_count: usize, state: &mut PageState) -> NextPage {
        state.add_page(records_count);

        if records_count == 0 {
            state.mark_done();
            return NextPage::Done;
        }

        state.add_offset(self.page_size);
        NextPage::with_param(&self.page_param, state.offset.to_string())
    }
}
