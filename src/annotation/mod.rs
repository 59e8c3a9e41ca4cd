// * Annotation: labels furniture terms in cleaned text to build NER training data

pub mod annotator;
pub mod dataset;
pub mod tally;
pub mod training_data;

pub use annotator::{filter_spans, Annotator, EntitySpan};
pub use dataset::{build_datasets, DatasetError, DatasetSummary};
pub use tally::TermTally;
pub use training_data::{build_training_data, read_training_data, write_training_data, EntityAnnotations, TrainingExample};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("Invalid term pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Training data I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Training data JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
