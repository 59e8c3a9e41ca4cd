// * Model training delegate
// * Conversion and training both run as external commands; this module checks inputs and reports the outcome.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;
use tokio::process::Command;
use tracing::info;

use crate::config::AssetPaths;

// * Interpreter used to launch the trainer
const DEFAULT_PYTHON: &str = "python3";

// * Turns annotated JSON exports into DocBin files.
// * Arguments come in (json, spacy) pairs.
const CONVERT_SCRIPT: &str = r#"
import json, sys
import spacy
from spacy.tokens import DocBin
from spacy.util import filter_spans

nlp = spacy.blank("en")
pairs = sys.argv[1:]
for source, target in zip(pairs[0::2], pairs[1::2]):
    db = DocBin()
    with open(source, encoding="utf-8") as handle:
        examples = json.load(handle)
    for _url, text, annotations in examples:
        doc = nlp(text)
        spans = [doc.char_span(s, e, label=label) for s, e, label in annotations["entities"]]
        doc.ents = filter_spans([span for span in spans if span is not None])
        db.add(doc)
    db.to_disk(target)
"#;

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Required training input missing: {0}")]
    MissingInput(PathBuf),

    #[error("Failed to launch {stage}: {source}")]
    Spawn {
        stage: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} exited with {status}")]
    Failed { stage: &'static str, status: ExitStatus },
}

/// A single training run description
#[derive(Debug, Clone)]
pub struct TrainingJob {
    pub python: String,
    pub config: PathBuf,
    pub output: PathBuf,
    pub train_json: PathBuf,
    pub dev_json: PathBuf,
    pub train_data: PathBuf,
    pub dev_data: PathBuf,
}

impl TrainingJob {
    // * DocBin files are written next to their JSON export, as `.spacy`.
    pub fn from_assets(paths: &AssetPaths) -> Self {
        let train_json = paths.training_data();
        let dev_json = paths.evaluation_data();

        Self {
            python: DEFAULT_PYTHON.to_string(),
            config: paths.model_config(),
            output: paths.model_output(),
            train_data: train_json.with_extension("spacy"),
            dev_data: dev_json.with_extension("spacy"),
            train_json,
            dev_json,
        }
    }

    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    /// Fails on the first input file that does not exist.
    pub fn verify_inputs(&self) -> Result<(), TrainingError> {
        for path in [&self.config, &self.train_json, &self.dev_json] {
            if !path.is_file() {
                return Err(TrainingError::MissingInput(path.clone()));
            }
        }
        Ok(())
    }

    pub fn convert_args(&self) -> Vec<String> {
        vec![
            "-c".to_string(),
            CONVERT_SCRIPT.to_string(),
            display(&self.train_json),
            display(&self.train_data),
            display(&self.dev_json),
            display(&self.dev_data),
        ]
    }

    pub fn train_args(&self) -> Vec<String> {
        vec![
            "-m".to_string(),
            "spacy".to_string(),
            "train".to_string(),
            display(&self.config),
            "--output".to_string(),
            display(&self.output),
            "--paths.train".to_string(),
            display(&self.train_data),
            "--paths.dev".to_string(),
            display(&self.dev_data),
        ]
    }

    /// Converts the JSON exports, then trains.
    pub async fn run(&self) -> Result<(), TrainingError> {
        self.verify_inputs()?;

        info!(train = %self.train_data.display(), dev = %self.dev_data.display(), "Converting training data");
        self.exec("convert", self.convert_args()).await?;

        info!(python = %self.python, args = ?self.train_args(), "Launching model training");
        self.exec("train", self.train_args()).await?;

        info!(output = %self.output.display(), "Model training finished");
        Ok(())
    }

    async fn exec(&self, stage: &'static str, args: Vec<String>) -> Result<(), TrainingError> {
        let status = Command::new(&self.python)
            .args(args)
            .status()
            .await
            .map_err(|source| TrainingError::Spawn { stage, source })?;

        if !status.success() {
            return Err(TrainingError::Failed { stage, status });
        }
        Ok(())
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_args_layout() {
        let job = TrainingJob::from_assets(&AssetPaths::new("assets"));
        assert_eq!(
            job.train_args(),
            vec![
                "-m", "spacy", "train", "assets/config.cfg",
                "--output", "assets/output",
                "--paths.train", "assets/training_data.spacy",
                "--paths.dev", "assets/evaluation_data.spacy",
            ]
        );
    }

    #[test]
    fn test_convert_args_pair_json_with_docbin() {
        let job = TrainingJob::from_assets(&AssetPaths::new("assets"));
        let args = job.convert_args();

        assert_eq!(args[0], "-c");
        assert!(args[1].contains("DocBin"));
        assert_eq!(
            &args[2..],
            &[
                "assets/training_data.json",
                "assets/training_data.spacy",
                "assets/evaluation_data.json",
                "assets/evaluation_data.spacy",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_inputs_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let job = TrainingJob::from_assets(&AssetPaths::new(dir.path()));

        match job.run().await {
            Err(TrainingError::MissingInput(path)) => assert!(path.ends_with("config.cfg")),
            other => panic!("expected missing input, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failing_conversion_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AssetPaths::new(dir.path());
        let job = TrainingJob::from_assets(&paths).with_python("false");
        for path in [&job.config, &job.train_json, &job.dev_json] {
            std::fs::write(path, "").unwrap();
        }

        assert!(matches!(
            job.run().await,
            Err(TrainingError::Failed { stage: "convert", .. })
        ));
    }
}
