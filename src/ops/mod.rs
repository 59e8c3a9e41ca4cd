// * Operations: logging setup and the external model-training delegate

pub mod telemetry;
pub mod trainer;

pub use telemetry::{init_tracing, init_tracing_pretty};
pub use trainer::{TrainingError, TrainingJob};
