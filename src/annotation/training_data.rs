// * Training data assembly and JSON export

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::annotation::annotator::{filter_spans, Annotator, EntitySpan};
use crate::annotation::AnnotationError;
use crate::engine::pipeline::ExtractionResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAnnotations {
    pub entities: Vec<EntitySpan>,
}

/// One annotated page. Serializes as `[url, text, {"entities": [...]}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample(pub String, pub String, pub EntityAnnotations);

impl TrainingExample {
    pub fn url(&self) -> &str {
        &self.0
    }

    pub fn text(&self) -> &str {
        &self.1
    }

    pub fn entities(&self) -> &[EntitySpan] {
        &self.2.entities
    }
}

/// Annotates every page; pages without a single match are left out.
pub fn build_training_data(result: &ExtractionResult, annotator: &Annotator) -> Vec<TrainingExample> {
    let mut examples: Vec<TrainingExample> = result
        .iter()
        .filter_map(|(url, text)| {
            let spans = annotator.annotate(text);
            if spans.is_empty() {
                return None;
            }
            Some(TrainingExample(
                url.to_string(),
                text.to_string(),
                EntityAnnotations {
                    entities: filter_spans(spans),
                },
            ))
        })
        .collect();

    examples.sort_by(|a, b| a.0.cmp(&b.0));
    examples
}

/// Writes examples as pretty JSON with a 4-space indent.
pub fn write_training_data(examples: &[TrainingExample], path: &Path) -> Result<(), AnnotationError> {
    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    examples.serialize(&mut serializer)?;
    writer.flush()?;

    info!(path = %path.display(), examples = examples.len(), "Training data written");
    Ok(())
}

pub fn read_training_data(path: &Path) -> Result<Vec<TrainingExample>, AnnotationError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}
