// * Dataset assembly: extract the training and evaluation seed slices, annotate, export JSON

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::annotation::annotator::Annotator;
use crate::annotation::tally::TermTally;
use crate::annotation::training_data::{build_training_data, write_training_data, TrainingExample};
use crate::annotation::AnnotationError;
use crate::config::constants::{EVALUATION_SLICE, TRAINING_SLICE};
use crate::config::AssetPaths;
use crate::engine::pipeline::{ExtractionPipeline, PipelineError};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Failed to export {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: AnnotationError,
    },
}

/// Outcome of a dataset build
#[derive(Debug, Clone, Default)]
pub struct DatasetSummary {
    pub training: Vec<TrainingExample>,
    pub evaluation: Vec<TrainingExample>,
}

impl DatasetSummary {
    pub fn tally(&self) -> TermTally {
        TermTally::from_examples(self.training.iter().chain(self.evaluation.iter()))
    }
}

/// Builds both splits from `urls`, writing the text reports and annotated JSON under `paths`.
pub async fn build_datasets(
    pipeline: &ExtractionPipeline,
    annotator: &Annotator,
    urls: &[String],
    paths: &AssetPaths,
) -> Result<DatasetSummary, DatasetError> {
    let training = build_split(
        pipeline,
        annotator,
        &slice(urls, TRAINING_SLICE),
        &paths.training_report(),
        &paths.training_data(),
    )
    .await?;

    let evaluation = build_split(
        pipeline,
        annotator,
        &slice(urls, EVALUATION_SLICE),
        &paths.evaluation_report(),
        &paths.evaluation_data(),
    )
    .await?;

    Ok(DatasetSummary { training, evaluation })
}

async fn build_split(
    pipeline: &ExtractionPipeline,
    annotator: &Annotator,
    seeds: &[String],
    report: &Path,
    export: &Path,
) -> Result<Vec<TrainingExample>, DatasetError> {
    let data = pipeline.extract_website_data(seeds, Some(report)).await?;
    let examples = build_training_data(&data, annotator);

    write_training_data(&examples, export).map_err(|source| DatasetError::Export {
        path: export.to_path_buf(),
        source,
    })?;

    info!(seeds = seeds.len(), pages = data.len(), annotated = examples.len(), "Dataset split built");
    Ok(examples)
}

// * [start, end) of the seed list, clipped to its length
fn slice(urls: &[String], (start, end): (usize, usize)) -> Vec<String> {
    urls.iter().skip(start).take(end.saturating_sub(start)).cloned().collect()
}
