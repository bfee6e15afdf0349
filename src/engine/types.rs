//! Engine types

use crate::error::Result;
use futures::Stream;
use serde_json::Value;
use std::pin::Pin;

/// Lazy stream of decoded records as exposed to the host framework
///
/// Finite (bounded by pagination termination) and single-pass: each record
/// is yielded exactly once, in page order. The first page is not fetched
/// until the stream is polled.
pub type RecordStream = Pin<Box<dyn Stream<Item = Result<Value>> + Send>>;

/// Statistics for one extraction run
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractStats {
    /// Pages fetched
    pub pages_fetched: u64,
    /// Records yielded to the caller
    pub records_extracted: u64,
    /// Records dropped by the post-process hook
    pub records_skipped: u64,
}

impl ExtractStats {
    /// Record one fetched page
    pub(crate) fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Record yielded records
    pub(crate) fn add_records(&mut self, count: usize) {
        self.records_extracted += count as u64;
    }

    /// Record records dropped by the post-process hook
    pub(crate) fn add_skipped(&mut self, count: usize) {
        self.records_skipped += count as u64;
    }
}
