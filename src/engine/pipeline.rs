// * Extraction Orchestrator
// * Phase 1 expands seeds with discovered links, phase 2 fetches and cleans every unique URL.
// * Per-URL failures only shrink the result; the run itself always completes.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::constants::REQUEST_TIMEOUT_SECS;
use crate::engine::dispatcher::{default_concurrency, dispatch};
use crate::engine::links::discover_links;
use crate::network::client::FastClient;
use crate::network::errors::NetworkError;
use crate::network::fetcher::{FetchMode, PageFetcher};
use crate::persistence::report::write_report;
use crate::refinery::{refine_page, TextCleaner};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] NetworkError),

    #[error("Failed to write report {path}: {source}")]
    Report {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Tuning knobs for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum tasks in flight per phase
    pub concurrency: usize,
    /// Per-request timeout applied by the HTTP client
    pub request_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// One page's cleaned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedTextRecord {
    pub url: String,
    pub text: String,
}

/// URL to cleaned text mapping produced by a run.
/// Only pages with non-empty cleaned text are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pages: HashMap<String, String>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a record; empty text is dropped. Returns whether it was kept.
    pub fn insert(&mut self, record: CleanedTextRecord) -> bool {
        if record.text.is_empty() {
            return false;
        }
        self.pages.insert(record.url, record.text);
        true
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.pages.get(url).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pages.iter().map(|(url, text)| (url.as_str(), text.as_str()))
    }
}

impl FromIterator<CleanedTextRecord> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = CleanedTextRecord>>(iter: I) -> Self {
        let mut result = Self::new();
        for record in iter {
            result.insert(record);
        }
        result
    }
}

/// Runs both extraction phases over a seed list
pub struct ExtractionPipeline {
    fetcher: Arc<dyn PageFetcher>,
    cleaner: Arc<TextCleaner>,
    config: PipelineConfig,
}

impl ExtractionPipeline {
    /// Pipeline backed by the real HTTP client
    pub fn new(cleaner: TextCleaner, config: PipelineConfig) -> Result<Self, PipelineError> {
        let client = FastClient::with_timeout(config.request_timeout)?;
        Ok(Self::with_fetcher(Arc::new(client), cleaner, config))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>, cleaner: TextCleaner, config: PipelineConfig) -> Self {
        Self {
            fetcher,
            cleaner: Arc::new(cleaner),
            config,
        }
    }

    /// Extracts cleaned text for the seeds and every same-site page linked from them.
    ///
    /// When `output` is given the mapping is also written there, one
    /// `url: text` line per entry, replacing any previous file.
    pub async fn extract_website_data(
        &self,
        urls: &[String],
        output: Option<&Path>,
    ) -> Result<ExtractionResult, PipelineError> {
        let unique_urls = self.expand_urls(urls).await;
        let result = self.extract_texts(unique_urls).await;

        info!(pages = result.len(), "Website data extraction finished");

        if let Some(path) = output {
            write_report(&result, path).map_err(|source| PipelineError::Report {
                path: path.display().to_string(),
                source,
            })?;
            info!(path = %path.display(), "Extraction report written");
        }

        Ok(result)
    }

    // * Phase 1: link discovery over every seed, merged and deduplicated.
    async fn expand_urls(&self, seeds: &[String]) -> HashSet<String> {
        let discovered = dispatch("link_discovery", seeds.to_vec(), self.config.concurrency, |url| {
            let fetcher = Arc::clone(&self.fetcher);
            async move { discover_links(fetcher.as_ref(), &url).await }
        })
        .await;

        let discovered_count: usize = discovered.iter().map(Vec::len).sum();

        let unique: HashSet<String> = seeds
            .iter()
            .cloned()
            .chain(discovered.into_iter().flatten())
            .collect();

        info!(
            seeds = seeds.len(),
            discovered = discovered_count,
            unique = unique.len(),
            "Link expansion complete"
        );
        unique
    }

    // * Phase 2: fetch, extract visible text and clean each unique URL.
    async fn extract_texts(&self, urls: HashSet<String>) -> ExtractionResult {
        let records = dispatch("text_extraction", urls, self.config.concurrency, |url| {
            let fetcher = Arc::clone(&self.fetcher);
            let cleaner = Arc::clone(&self.cleaner);
            async move {
                let html = fetcher.fetch(&url, FetchMode::Text).await;
                if html.is_empty() {
                    return None;
                }

                let text = refine_page(&html.into_text(), &cleaner);
                if text.is_empty() {
                    debug!(url = %url, "No usable text on page");
                    return None;
                }

                Some(CleanedTextRecord { url, text })
            }
        })
        .await;

        records.into_iter().flatten().collect()
    }
}
