//! Extraction engine
//!
//! Drives one full extraction of a resource endpoint: obtain the current
//! pagination parameters, issue an authenticated GET, decode the page, feed
//! the raw record count back to the cursor, post-process each record, and
//! yield. The loop ends when a page comes back with zero records.
//!
//! Page fetches are strictly sequential — the next request's offset depends
//! on the outcome of the previous page — and nothing is persisted locally.

mod types;

pub use types::{ExtractStats, RecordStream};

use crate::auth::TokenAuthenticator;
use crate::config::ConnectorConfig;
use crate::decode::JsonDecoder;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{OffsetCursor, PageState};
use crate::streams::StreamConfig;
use futures::stream::{self, TryStreamExt};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Orchestrates paginated extraction for one Cegid tenant
///
/// Holds the session-scoped token cache and the HTTP client. One extractor
/// serves one endpoint at a time; a host that parallelizes across resource
/// endpoints should create one extractor per endpoint so pagination state
/// is never shared.
#[derive(Debug, Clone)]
pub struct Extractor {
    client: HttpClient,
    authenticator: TokenAuthenticator,
    config: ConnectorConfig,
}

impl Extractor {
    /// Create an extractor, validating the config up front
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        config.validate()?;

        let authenticator = match &config.token_url {
            Some(url) => {
                TokenAuthenticator::with_token_url(&config.username, &config.password, url)
            }
            None => TokenAuthenticator::new(&config.username, &config.password),
        };

        let http_config = HttpClientConfig::builder()
            .base_url(config.resource_base())
            .header("Content-Type", "application/json")
            .build();
        // Clones share the session token cache.
        let client = HttpClient::with_auth(http_config, authenticator.clone());

        Ok(Self {
            client,
            authenticator,
            config,
        })
    }

    /// The validated connector configuration
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Verify credentials with one token exchange
    pub async fn check(&self) -> Result<()> {
        self.authenticator
            .authenticate(&self.config.username, &self.config.password)
            .await?;
        Ok(())
    }

    /// Lazily extract all records of a stream
    ///
    /// Nothing is fetched until the returned stream is polled; the token
    /// exchange happens on the first page. Records are yielded exactly once,
    /// in page order. Any authentication, transport, or decode failure ends
    /// the stream with that error.
    pub fn records(&self, stream_config: &StreamConfig) -> RecordStream {
        let page_loop = PageLoop::new(self.client.clone(), stream_config.clone());

        Box::pin(
            stream::try_unfold(page_loop, |mut page_loop| async move {
                if page_loop.state.done {
                    page_loop.log_summary();
                    // Pin the error type; Error has several From impls, so
                    // inference cannot pick one on its own here.
                    return Ok::<_, Error>(None);
                }
                let records = page_loop.fetch_page().await?;
                Ok(Some((
                    stream::iter(records.into_iter().map(Ok::<Value, Error>)),
                    page_loop,
                )))
            })
            .try_flatten(),
        )
    }

    /// Extract a whole stream into memory
    pub async fn extract(&self, stream_config: &StreamConfig) -> Result<Vec<Value>> {
        self.records(stream_config).try_collect().await
    }
}

/// State carried across page fetches of one extraction run
struct PageLoop {
    client: HttpClient,
    stream: StreamConfig,
    cursor: OffsetCursor,
    state: PageState,
    decoder: JsonDecoder,
    stats: ExtractStats,
    started: Instant,
}

impl PageLoop {
    fn new(client: HttpClient, stream: StreamConfig) -> Self {
        let decoder = JsonDecoder::with_path(&stream.records_path);
        Self {
            client,
            stream,
            cursor: OffsetCursor::new(),
            state: PageState::new(),
            decoder,
            stats: ExtractStats::default(),
            started: Instant::now(),
        }
    }

    /// Fetch, decode, and post-process one page
    async fn fetch_page(&mut self) -> Result<Vec<Value>> {
        let mut req = RequestConfig::new();

        for (key, value) in self.cursor.query_params(&self.state) {
            req = req.query(key, value);
        }

        // Request server-side ordering whenever an incremental key is
        // configured, so record order is stable across runs.
        if let Some(key) = &self.stream.replication_key {
            req = req.query("sort", "asc").query("order_by", key);
        }

        let page = self.state.pages_fetched + 1;
        let response = self
            .client
            .get_with_config(&self.stream.path, req)
            .await
            .with_context(|| {
                format!("fetching {} page {page} ({})", self.stream.name, self.stream.path)
            })?;
        let body = response
            .text()
            .await
            .map_err(Error::Http)
            .with_context(|| format!("reading {} page {page} body", self.stream.name))?;

        let records = self
            .decoder
            .decode(&body)
            .with_context(|| format!("decoding {} page {page}", self.stream.name))?;
        let raw_count = records.remaining();

        // The cursor sees the raw decoded count; records dropped by the
        // post-process hook must not affect pagination.
        self.cursor.process_page(raw_count, &mut self.state);
        self.stats.add_page();

        let kept: Vec<Value> = match &self.stream.post_process {
            Some(hook) => records.filter_map(|r| hook.post_process(r)).collect(),
            None => records.collect(),
        };
        self.stats.add_records(kept.len());
        self.stats.add_skipped(raw_count - kept.len());

        debug!(
            stream = %self.stream.name,
            page = self.state.pages_fetched,
            records = raw_count,
            kept = kept.len(),
            "fetched page"
        );

        Ok(kept)
    }

    fn log_summary(&self) {
        info!(
            stream = %self.stream.name,
            pages = self.stats.pages_fetched,
            records = self.stats.records_extracted,
            skipped = self.stats.records_skipped,
            duration_ms = self.started.elapsed().as_millis() as u64,
            "extraction complete"
        );
    }
}
