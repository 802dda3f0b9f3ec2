//! Section file writer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{default_output_dir, sanitize_title};
use crate::error::{Result, SplitterError};
use crate::types::{Section, SplitReport};

/// Determine where section files go.
///
/// A non-empty `outdir` is used as given. Otherwise the files go into a
/// `sections` directory next to `input`, which is made absolute first.
pub fn resolve_output_dir(input: &Path, outdir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = outdir.filter(|dir| !dir.as_os_str().is_empty()) {
        return Ok(dir.to_path_buf());
    }

    let input = std::path::absolute(input).map_err(SplitterError::CurrentDir)?;
    Ok(default_output_dir(&input))
}

/// Write every section to its own file in `output_dir`.
///
/// See [`write_sections_with`].
pub fn write_sections(output_dir: &Path, sections: &[Section]) -> Result<SplitReport> {
    write_sections_with(output_dir, sections, |_| {})
}

/// Write every section to its own file, calling `on_written` after each one.
///
/// The directory is created with its parents if needed. Files are named
/// `NN_<sanitized title>.txt` and existing files are overwritten. The
/// first failure aborts the run; files written before it are kept.
pub fn write_sections_with<F>(
    output_dir: &Path,
    sections: &[Section],
    mut on_written: F,
) -> Result<SplitReport>
where
    F: FnMut(&Path),
{
    fs::create_dir_all(output_dir).map_err(|source| SplitterError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = SplitReport::new(output_dir);

    for (index, section) in sections.iter().enumerate() {
        let file_name = section.file_name(index + 1);
        if sanitize_title(&section.title).is_empty() {
            tracing::warn!(
                title = %section.title,
                file = %file_name,
                "Section title has no filename-safe characters"
            );
        }

        let path = output_dir.join(&file_name);
        fs::write(&path, section.render()).map_err(|source| SplitterError::WriteSection {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Wrote section");

        on_written(&path);
        report.files.push(path);
    }

    Ok(report)
}
