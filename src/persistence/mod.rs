// * Persistence: asset loading and extraction reports

pub mod loaders;
pub mod report;

pub use loaders::{load_currency_codes, load_seed_urls, load_word_list, AssetError};
pub use report::write_report;
