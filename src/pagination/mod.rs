//! Pagination module
//!
//! Offset-based paging against the Cegid API. Each request names a numeric
//! starting position; the page size is fixed at 100.
//!
//! Termination is decided strictly by a zero-record page. The API does not
//! expose a trustworthy "has more" flag, so a short-but-nonempty final page
//! triggers one more fetch that is expected to come back empty. Keep this
//! rule as-is: it matches the upstream API's documented contract.

mod cursor;
mod types;

pub use cursor::OffsetCursor;
pub use types::{NextPage, PageState, PAGE_SIZE};
