//! Host-framework source trait
//!
//! The boundary the host extraction framework programs against: validate
//! credentials, list streams, and read one stream as a lazy record stream.
//! Checkpointing and output writing stay on the host's side of this seam.

use crate::engine::{Extractor, RecordStream};
use crate::error::Result;
use crate::streams::{self, StreamConfig};
use async_trait::async_trait;

/// A readable data source
#[async_trait]
pub trait Source: Send + Sync {
    /// Test that credentials and configuration are valid
    async fn check(&self) -> Result<()>;

    /// Streams this source can extract
    fn streams(&self) -> Vec<StreamConfig>;

    /// Read one stream as a lazy sequence of records
    async fn read(&self, stream: &StreamConfig) -> Result<RecordStream>;
}

#[async_trait]
impl Source for Extractor {
    async fn check(&self) -> Result<()> {
        Extractor::check(self).await
    }

    fn streams(&self) -> Vec<StreamConfig> {
        streams::all()
    }

    async fn read(&self, stream: &StreamConfig) -> Result<RecordStream> {
        Ok(self.records(stream))
    }
}
