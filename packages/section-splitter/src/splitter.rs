//! Splitter service that ties all components together.

use std::path::Path;

use crate::error::Result;
use crate::input::read_input;
use crate::splitting::split_sections;
use crate::types::SplitReport;
use crate::writer::{resolve_output_dir, write_sections_with};

/// Split a report file into one file per section.
///
/// # Arguments
/// * `input` - Path to the report
/// * `outdir` - Output directory (default: `sections` next to the input)
///
/// # Returns
/// A `SplitReport` listing the files written, in section order
pub fn split_file(input: &Path, outdir: Option<&Path>) -> Result<SplitReport> {
    split_file_with(input, outdir, |_| {})
}

/// Split a report file, calling `on_written` after each section file.
///
/// Same as [`split_file`]; the callback lets callers report progress.
pub fn split_file_with<F>(
    input: &Path,
    outdir: Option<&Path>,
    on_written: F,
) -> Result<SplitReport>
where
    F: FnMut(&Path),
{
    let text = read_input(input)?;
    let sections = split_sections(&text);
    let output_dir = resolve_output_dir(input, outdir)?;

    let report = write_sections_with(&output_dir, &sections, on_written)?;
    tracing::info!(
        input = %input.display(),
        output_dir = %report.output_dir.display(),
        files = report.count(),
        "Split report into sections"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_split_file_default_output_dir() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("audit.txt");
        fs::write(&input, "=====\nIntro\n=====\nHello world.\n").unwrap();

        let report = split_file(&input, None).unwrap();
        assert_eq!(report.output_dir, temp_dir.path().join("sections"));
        assert_eq!(report.count(), 1);
        assert!(temp_dir.path().join("sections").join("01_Intro.txt").is_file());
    }

    #[test]
    fn test_split_file_empty_outdir_uses_default() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("audit.txt");
        fs::write(&input, "no markers here\n").unwrap();

        let report = split_file(&input, Some(Path::new(""))).unwrap();
        assert_eq!(report.output_dir, temp_dir.path().join("sections"));
        assert_eq!(
            report.files,
            vec![temp_dir.path().join("sections").join("01_full_report.txt")]
        );
    }

    #[test]
    fn test_split_file_with_reports_each_file() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("audit.txt");
        fs::write(&input, "=====\nA\n=====\none\n=====\nB\n=====\ntwo\n").unwrap();

        let mut written = Vec::new();
        let report =
            split_file_with(&input, None, |path| written.push(path.to_path_buf())).unwrap();
        assert_eq!(written, report.files);
        assert_eq!(written.len(), 2);
    }

    #[test]
    fn test_split_file_missing_input_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("missing.txt");

        assert!(split_file(&input, None).is_err());
        assert!(!temp_dir.path().join("sections").exists());
    }
}
