// * Term Annotation
// * Marks every word-bounded, case-insensitive occurrence of a known term.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::annotation::AnnotationError;

/// A labelled character span in a cleaned text.
/// Serializes as `[start, end, label]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan(pub usize, pub usize, pub String);

impl EntitySpan {
    pub fn new(start: usize, end: usize, label: &str) -> Self {
        Self(start, end, label.to_string())
    }

    pub fn start(&self) -> usize {
        self.0
    }

    pub fn end(&self) -> usize {
        self.1
    }

    pub fn label(&self) -> &str {
        &self.2
    }

    pub fn len(&self) -> usize {
        self.1 - self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == self.1
    }

    fn overlaps(&self, other: &EntitySpan) -> bool {
        self.0 < other.1 && other.0 < self.1
    }
}

/// Compiled term patterns for one entity label
pub struct Annotator {
    patterns: Vec<Regex>,
    label: String,
}

impl Annotator {
    pub fn new<'a>(terms: impl IntoIterator<Item = &'a String>, label: &str) -> Result<Self, AnnotationError> {
        let mut patterns = Vec::new();
        let mut seen = HashSet::new();

        for term in terms {
            let term = term.trim();
            if term.is_empty() || !seen.insert(term.to_lowercase()) {
                continue;
            }

            let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
                .case_insensitive(true)
                .build()?;
            patterns.push(pattern);
        }

        Ok(Self {
            patterns,
            label: label.to_string(),
        })
    }

    pub fn term_count(&self) -> usize {
        self.patterns.len()
    }

    /// Every match of every term, unsorted and possibly overlapping.
    pub fn annotate(&self, text: &str) -> Vec<EntitySpan> {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.find_iter(text))
            .map(|m| EntitySpan::new(m.start(), m.end(), &self.label))
            .collect()
    }
}

/// Resolves overlaps: longer spans win, then the earlier one. Output is sorted by start.
pub fn filter_spans(mut spans: Vec<EntitySpan>) -> Vec<EntitySpan> {
    spans.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start().cmp(&b.start())));

    let mut kept: Vec<EntitySpan> = Vec::with_capacity(spans.len());
    for span in spans {
        if !kept.iter().any(|k| k.overlaps(&span)) {
            kept.push(span);
        }
    }

    kept.sort_by_key(EntitySpan::start);
    kept
}
