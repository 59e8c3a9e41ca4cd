// * Term occurrence tally: how many pages mention each term

use std::collections::{HashMap, HashSet};

use crate::annotation::training_data::TrainingExample;

/// Page counts per term; a page counts at most once per term.
#[derive(Debug, Clone, Default)]
pub struct TermTally {
    counts: HashMap<String, usize>,
}

impl TermTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies the distinct annotated terms of each example, lowercased.
    pub fn from_examples<'a>(examples: impl IntoIterator<Item = &'a TrainingExample>) -> Self {
        let mut tally = Self::new();
        for example in examples {
            let terms: HashSet<String> = example
                .entities()
                .iter()
                .filter_map(|span| example.text().get(span.start()..span.end()))
                .map(str::to_lowercase)
                .collect();
            tally.record_page(terms);
        }
        tally
    }

    pub fn record_page<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for term in terms {
            *self.counts.entry(term.into()).or_insert(0) += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Terms by count descending, ties alphabetical.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.counts.iter().map(|(term, count)| (term.as_str(), *count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        ranked
    }

    pub fn top(&self) -> Option<(&str, usize)> {
        self.ranked().into_iter().next()
    }

    /// Renders a bordered grid table of the ranked counts.
    pub fn render_grid(&self) -> String {
        let header = ("Furniture".to_string(), "Number of occurrences".to_string());
        let rows: Vec<(String, String)> = std::iter::once(header)
            .chain(self.ranked().into_iter().map(|(t, c)| (t.to_string(), c.to_string())))
            .collect();

        let left = rows.iter().map(|(t, _)| t.len()).max().unwrap_or(0);
        let right = rows.iter().map(|(_, c)| c.len()).max().unwrap_or(0);
        let border = format!("+{}+{}+", "-".repeat(left + 2), "-".repeat(right + 2));

        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');
        for (term, count) in &rows {
            out.push_str(&format!("| {:<left$} | {:<right$} |\n", term, count));
            out.push_str(&border);
            out.push('\n');
        }
        out
    }
}
