//! # Cegid Connector
//!
//! Paginated record extraction from the Cegid retail API.
//!
//! The connector authenticates with a password-grant token exchange, walks
//! offset-paginated resource endpoints, and decodes each page into JSON
//! records with arbitrary-precision numbers so monetary and quantity fields
//! round-trip exactly. Records are exposed to the host framework as a lazy,
//! single-pass stream.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cegid_connector::{ConnectorConfig, Extractor, streams};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> cegid_connector::Result<()> {
//!     let config = ConnectorConfig::from_value(&serde_json::json!({
//!         "username": "svc-extract",
//!         "password": "...",
//!         "api_url": "https://retail.cegid.cloud",
//!         "folder_id": "ACME",
//!     }))?;
//!
//!     let extractor = Extractor::new(config)?;
//!     let stream = streams::customer_orders();
//!
//!     let mut records = extractor.records(&stream);
//!     while let Some(record) = records.try_next().await? {
//!         // Hand off to the host framework
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          Extractor                            │
//! │  records(stream) → Stream<Result<Value>>    check() → auth    │
//! └───────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴─────────┬───────────────────────┐
//! │     Auth     │       Pagination       │        Decode         │
//! ├──────────────┼────────────────────────┼───────────────────────┤
//! │ Password     │ Offset cursor          │ JSON + JSONPath       │
//! │ grant, 10s   │ page_size = 100        │ arbitrary-precision   │
//! │ session cache│ stops on empty page    │ numbers               │
//! └──────────────┴────────────────────────┴───────────────────────┘
//! ```

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::doc_markdown)]

/// Error types for the connector
pub mod error;

/// Typed connector configuration
pub mod config;

/// Token authentication
pub mod auth;

/// HTTP client with rate limiting
pub mod http;

/// Offset pagination cursor
pub mod pagination;

/// Response decoding into records
pub mod decode;

/// Stream definitions and post-processing hooks
pub mod streams;

/// Extraction engine
pub mod engine;

/// Host-framework source trait
pub mod source;

pub use config::ConnectorConfig;
pub use engine::{Extractor, RecordStream};
pub use error::{Error, Result};
pub use source::Source;
pub use streams::StreamConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
