// * Static asset loaders: word lists, currency codes and seed URLs

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl AssetError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Loads a newline-separated word list (stop words, furniture names).
pub fn load_word_list(path: &Path) -> Result<HashSet<String>, AssetError> {
    let content = std::fs::read_to_string(path).map_err(|e| AssetError::from_io(path, e))?;
    let words: HashSet<String> = content.lines().map(str::to_string).collect();

    info!(path = %path.display(), entries = words.len(), "Loaded word list");
    Ok(words)
}

/// Loads lowercase currency codes from the third column of a CSV with a header row.
pub fn load_currency_codes(path: &Path) -> Result<HashSet<String>, AssetError> {
    let mut reader = csv_reader(path)?;
    let mut codes = HashSet::new();

    for record in reader.records() {
        let record = record.map_err(|source| AssetError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        match record.get(2) {
            Some(code) if !code.is_empty() => {
                codes.insert(code.to_lowercase());
            }
            _ => warn!(row = ?record, "Skipping row with insufficient columns"),
        }
    }

    info!(path = %path.display(), entries = codes.len(), "Loaded currency codes");
    Ok(codes)
}

/// Loads seed URLs from the first column of a CSV with a header row.
pub fn load_seed_urls(path: &Path) -> Result<Vec<String>, AssetError> {
    let mut reader = csv_reader(path)?;
    let mut urls = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|source| AssetError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(url) = record.get(0) {
            let url = url.trim();
            if !url.is_empty() {
                urls.push(url.to_string());
            }
        }
    }

    info!(path = %path.display(), entries = urls.len(), "Loaded seed URLs");
    Ok(urls)
}

// * Header row skipped; ragged rows allowed.
fn csv_reader(path: &Path) -> Result<csv::Reader<File>, AssetError> {
    let file = File::open(path).map_err(|e| AssetError::from_io(path, e))?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}
