//! Stream definitions
//!
//! A [`StreamConfig`] names one resource endpoint and how to pull records
//! out of it. Built-in definitions for the Cegid retail API live at the
//! bottom of this module.

use serde_json::Value;
use std::sync::Arc;

/// Per-record post-processing hook
///
/// Runs after decoding and before a record is yielded to the host.
/// Returning `None` drops the record; dropped records never affect
/// pagination, which is driven by the raw decoded count.
pub trait PostProcess: Send + Sync {
    /// Transform, enrich, or drop a record
    fn post_process(&self, record: Value) -> Option<Value>;
}

impl<F> PostProcess for F
where
    F: Fn(Value) -> Option<Value> + Send + Sync,
{
    fn post_process(&self, record: Value) -> Option<Value> {
        self(record)
    }
}

/// Definition of one extractable stream
#[derive(Clone)]
pub struct StreamConfig {
    /// Stream name, e.g. `customer-orders`
    pub name: String,

    /// Resource path relative to `{api_url}/{folder_id}/api`
    pub path: String,

    /// JSONPath to the records within each response page
    pub records_path: String,

    /// Field used to request server-side ordering for incremental runs.
    /// When set, every page request carries `sort=asc` and
    /// `order_by=<key>` so record order is stable across runs.
    pub replication_key: Option<String>,

    /// Primary key fields, for the host's deduplication
    pub primary_key: Vec<String>,

    /// Optional per-record hook
    pub post_process: Option<Arc<dyn PostProcess>>,
}

impl StreamConfig {
    /// Create a stream over a top-level array response
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            records_path: "$[*]".to_string(),
            replication_key: None,
            primary_key: Vec::new(),
            post_process: None,
        }
    }

    /// Set the record path
    #[must_use]
    pub fn with_records_path(mut self, path: impl Into<String>) -> Self {
        self.records_path = path.into();
        self
    }

    /// Set the replication key
    #[must_use]
    pub fn with_replication_key(mut self, key: impl Into<String>) -> Self {
        self.replication_key = Some(key.into());
        self
    }

    /// Set the primary key fields
    #[must_use]
    pub fn with_primary_key(mut self, keys: Vec<String>) -> Self {
        self.primary_key = keys;
        self
    }

    /// Attach a post-process hook
    #[must_use]
    pub fn with_post_process(mut self, hook: impl PostProcess + 'static) -> Self {
        self.post_process = Some(Arc::new(hook));
        self
    }
}

impl std::fmt::Debug for StreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamConfig")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("records_path", &self.records_path)
            .field("replication_key", &self.replication_key)
            .field("primary_key", &self.primary_key)
            .field("has_post_process", &self.post_process.is_some())
            .finish()
    }
}

// ============================================================================
// Built-in streams
// ============================================================================

/// Customer order documents
pub fn customer_orders() -> StreamConfig {
    StreamConfig::new("customer-orders", "customer-documents/v1")
}

/// All built-in stream definitions
pub fn all() -> Vec<StreamConfig> {
    vec![customer_orders()]
}
