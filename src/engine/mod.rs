// * Engine: link discovery, task dispatch and the two-phase extraction pipeline

pub mod dispatcher;
pub mod domain;
pub mod links;
pub mod pipeline;

pub use dispatcher::{default_concurrency, dispatch};
pub use domain::RegistrableDomain;
pub use links::{discover_links, extract_same_site_links};
pub use pipeline::{CleanedTextRecord, ExtractionPipeline, ExtractionResult, PipelineConfig, PipelineError};
