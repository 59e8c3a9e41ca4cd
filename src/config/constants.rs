// * Configuration Constants
// * Central location for all configurable thresholds, timeouts and asset names

// * Per-request fetch timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// * Fallback worker count when host parallelism cannot be queried
pub const FALLBACK_CONCURRENCY: usize = 4;

// * User agent sent with every page request
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.109 Safari/537.36";

// * Entity label attached to every annotated furniture term
pub const FURNITURE_LABEL: &str = "FURNITURE";

// * Local currency missing from the ISO code list
pub const EXTRA_CURRENCY_CODE: &str = "lei";

// * Default assets directory
pub const DEFAULT_ASSETS_DIR: &str = "./assets";

// * Asset file names inside the assets directory
pub const STOP_WORDS_FILE: &str = "stop_words_english.txt";
pub const CURRENCY_CODES_FILE: &str = "codes-all.csv";
pub const FURNITURE_NAMES_FILE: &str = "furniture_names.txt";
pub const SEED_URLS_FILE: &str = "furniture_stores_pages.csv";
pub const TRAINING_REPORT_FILE: &str = "website_training_data.txt";
pub const EVALUATION_REPORT_FILE: &str = "website_evaluation_data.txt";
pub const TRAINING_DATA_FILE: &str = "training_data.json";
pub const EVALUATION_DATA_FILE: &str = "evaluation_data.json";
pub const MODEL_CONFIG_FILE: &str = "config.cfg";
pub const MODEL_OUTPUT_DIR: &str = "output";

// * Seed list slices: [start, end) per dataset
pub const TRAINING_SLICE: (usize, usize) = (0, 100);
pub const EVALUATION_SLICE: (usize, usize) = (101, 150);
