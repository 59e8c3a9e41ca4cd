// * Asset path layout
// * Every input list and generated artifact lives under a single assets directory

use std::path::{Path, PathBuf};

use crate::config::constants::{
    CURRENCY_CODES_FILE, DEFAULT_ASSETS_DIR, EVALUATION_DATA_FILE, EVALUATION_REPORT_FILE,
    FURNITURE_NAMES_FILE, MODEL_CONFIG_FILE, MODEL_OUTPUT_DIR, SEED_URLS_FILE, STOP_WORDS_FILE,
    TRAINING_DATA_FILE, TRAINING_REPORT_FILE,
};

/// Resolved locations of all asset files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn stop_words(&self) -> PathBuf {
        self.root.join(STOP_WORDS_FILE)
    }

    pub fn currency_codes(&self) -> PathBuf {
        self.root.join(CURRENCY_CODES_FILE)
    }

    pub fn furniture_names(&self) -> PathBuf {
        self.root.join(FURNITURE_NAMES_FILE)
    }

    pub fn seed_urls(&self) -> PathBuf {
        self.root.join(SEED_URLS_FILE)
    }

    pub fn training_report(&self) -> PathBuf {
        self.root.join(TRAINING_REPORT_FILE)
    }

    pub fn evaluation_report(&self) -> PathBuf {
        self.root.join(EVALUATION_REPORT_FILE)
    }

    pub fn training_data(&self) -> PathBuf {
        self.root.join(TRAINING_DATA_FILE)
    }

    pub fn evaluation_data(&self) -> PathBuf {
        self.root.join(EVALUATION_DATA_FILE)
    }

    pub fn model_config(&self) -> PathBuf {
        self.root.join(MODEL_CONFIG_FILE)
    }

    pub fn model_output(&self) -> PathBuf {
        self.root.join(MODEL_OUTPUT_DIR)
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted() {
        let paths = AssetPaths::new("/data/assets");
        assert_eq!(paths.stop_words(), PathBuf::from("/data/assets/stop_words_english.txt"));
        assert_eq!(paths.seed_urls(), PathBuf::from("/data/assets/furniture_stores_pages.csv"));
        assert_eq!(paths.model_output(), PathBuf::from("/data/assets/output"));
    }

    #[test]
    fn test_default_root() {
        assert_eq!(AssetPaths::default().root(), Path::new("./assets"));
    }
}
