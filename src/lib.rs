//! Furniture-retailer crawler that builds named-entity training data.
//!
//! Seed pages are expanded with same-site links, fetched in parallel, reduced
//! to cleaned token text, and annotated with known furniture terms.

pub mod annotation;
pub mod config;
pub mod engine;
pub mod network;
pub mod ops;
pub mod persistence;
pub mod refinery;

pub use engine::{CleanedTextRecord, ExtractionPipeline, ExtractionResult, PipelineConfig, PipelineError};
pub use refinery::TextCleaner;
