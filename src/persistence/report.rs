// * Extraction report: one `url: text` line per extracted page

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::engine::pipeline::ExtractionResult;

/// Writes the report, truncating any existing file.
pub fn write_report(result: &ExtractionResult, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (url, text) in result.iter() {
        writeln!(writer, "{}: {}", url, text)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pipeline::CleanedTextRecord;

    #[test]
    fn test_one_line_per_entry() {
        let result: ExtractionResult = vec![
            CleanedTextRecord { url: "https://www.example.com/a".to_string(), text: "sofa bed".to_string() },
            CleanedTextRecord { url: "https://www.example.com/b".to_string(), text: "lamp".to_string() },
        ]
        .into_iter()
        .collect();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale content\nfrom an older run\nthird line\n").unwrap();

        write_report(&result, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines: Vec<&str> = written.lines().collect();
        lines.sort_unstable();
        assert_eq!(
            lines,
            vec!["https://www.example.com/a: sofa bed", "https://www.example.com/b: lamp"]
        );
    }

    #[test]
    fn test_empty_result_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "old").unwrap();

        write_report(&ExtractionResult::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
