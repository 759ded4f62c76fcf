//! Archive data source contract and mock implementation.
//!
//! # Responsibility
//! - Define the async fetch seam used by archive loading and lazy part
//!   expansion.
//! - Provide the hard-coded mock source that resolves after a fixed delay.
//!
//! # Invariants
//! - The mock never mutates its catalog; every fetch returns fresh clones.
//! - Failures injected for tests surface as `ArchiveSourceError`, never
//!   panics.

use crate::model::archive::{Article, Issue, Part, PartId, Volume};
use crate::service::mock_catalog::{sample_catalog, MockCatalog};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Result type for archive data source calls.
pub type ArchiveSourceResult<T> = Result<T, ArchiveSourceError>;

/// Archive fetch errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveSourceError {
    /// The volume skeleton could not be fetched.
    VolumesUnavailable(String),
    /// Articles of one part could not be fetched.
    ArticlesUnavailable { part_id: PartId, message: String },
}

impl Display for ArchiveSourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VolumesUnavailable(message) => {
                write!(f, "archive volumes unavailable: {message}")
            }
            Self::ArticlesUnavailable { part_id, message } => {
                write!(f, "articles unavailable for part {part_id}: {message}")
            }
        }
    }
}

impl Error for ArchiveSourceError {}

/// Async source of archive volumes and per-part articles.
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Fetches the volume/issue/part skeleton.
    async fn fetch_volumes(&self) -> ArchiveSourceResult<Vec<Volume>>;
    /// Fetches the articles published under one part.
    async fn fetch_articles(
        &self,
        volume: &Volume,
        issue: &Issue,
        part: &Part,
    ) -> ArchiveSourceResult<Vec<Article>>;
}

/// Hard-coded archive source with artificial latency.
#[derive(Debug, Clone)]
pub struct MockArchiveSource {
    catalog: MockCatalog,
    delay: Duration,
    volumes_failure: Option<String>,
    failing_parts: BTreeSet<PartId>,
}

impl MockArchiveSource {
    /// Creates a source over the built-in sample catalog.
    pub fn new(delay: Duration) -> Self {
        Self::with_catalog(sample_catalog(), delay)
    }

    /// Creates a source over a caller-provided catalog.
    pub fn with_catalog(catalog: MockCatalog, delay: Duration) -> Self {
        Self {
            catalog,
            delay,
            volumes_failure: None,
            failing_parts: BTreeSet::new(),
        }
    }

    /// Makes the skeleton fetch fail with `message`.
    pub fn failing_volumes(mut self, message: impl Into<String>) -> Self {
        self.volumes_failure = Some(message.into());
        self
    }

    /// Makes the article fetch of `part_id` fail.
    pub fn failing_part(mut self, part_id: impl Into<PartId>) -> Self {
        self.failing_parts.insert(part_id.into());
        self
    }

    pub fn catalog(&self) -> &MockCatalog {
        &self.catalog
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl ArchiveSource for MockArchiveSource {
    async fn fetch_volumes(&self) -> ArchiveSourceResult<Vec<Volume>> {
        self.simulate_latency().await;

        if let Some(message) = &self.volumes_failure {
            return Err(ArchiveSourceError::VolumesUnavailable(message.clone()));
        }

        Ok(self.catalog.volumes.clone())
    }

    async fn fetch_articles(
        &self,
        _volume: &Volume,
        _issue: &Issue,
        part: &Part,
    ) -> ArchiveSourceResult<Vec<Article>> {
        self.simulate_latency().await;

        if self.failing_parts.contains(&part.id) {
            return Err(ArchiveSourceError::ArticlesUnavailable {
                part_id: part.id.clone(),
                message: "simulated network failure".to_string(),
            });
        }

        Ok(self
            .catalog
            .articles_by_part
            .get(&part.id)
            .cloned()
            .unwrap_or_default())
    }
}
