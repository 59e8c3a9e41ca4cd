// * Fetcher contract shared by the link discoverer and the text stage.
// * Failures never reach callers of `fetch`: they are logged and surface as empty content.

use async_trait::async_trait;
use tracing::warn;

use crate::network::errors::NetworkError;

// * Whether the caller needs decoded text or raw bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Bytes,
    Text,
}

/// Page body as returned by a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawContent {
    Bytes(Vec<u8>),
    Text(String),
}

impl RawContent {
    /// The "no content" value for a mode
    pub fn empty(mode: FetchMode) -> Self {
        match mode {
            FetchMode::Bytes => Self::Bytes(Vec::new()),
            FetchMode::Text => Self::Text(String::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Decodes into a string, replacing invalid UTF-8 sequences
    pub fn into_text(self) -> String {
        match self {
            Self::Bytes(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Self::Text(text) => text,
        }
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    // * Single GET, no retries.
    async fn try_fetch(&self, url: &str, mode: FetchMode) -> Result<RawContent, NetworkError>;

    // * Collapses every failure into empty content of the requested mode.
    async fn fetch(&self, url: &str, mode: FetchMode) -> RawContent {
        match self.try_fetch(url, mode).await {
            Ok(content) => content,
            Err(e) => {
                warn!(url = %url, error = %e, "Error fetching the URL");
                RawContent::empty(mode)
            }
        }
    }
}
