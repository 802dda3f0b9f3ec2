//! Core data types for the section splitter.

use std::path::PathBuf;

use crate::config::{sanitize_title, TITLE_PREFIX};

/// A titled block of text cut out of the input report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Title as it appears in the report, trimmed.
    pub title: String,

    /// Text between this section's marker and the next one.
    pub body: String,
}

impl Section {
    /// Create a new section.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Filename for this section at the given 1-based position.
    ///
    /// # Examples
    /// ```
    /// use section_splitter::Section;
    ///
    /// let section = Section::new("Network Findings", "none\n");
    /// assert_eq!(section.file_name(2), "02_Network_Findings.txt");
    /// ```
    #[must_use]
    pub fn file_name(&self, index: usize) -> String {
        format!("{index:02}_{}.txt", sanitize_title(&self.title))
    }

    /// File content: a title line followed by the body.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{TITLE_PREFIX}{}\n{}", self.title, self.body)
    }
}

/// Outcome of writing sections to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Directory the section files were written to.
    pub output_dir: PathBuf,

    /// Written files, in section order.
    pub files: Vec<PathBuf>,
}

impl SplitReport {
    /// Create an empty report for an output directory.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            files: Vec::new(),
        }
    }

    /// Number of files written.
    #[must_use]
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_padding() {
        let section = Section::new("Intro", "Hello world.\n");
        assert_eq!(section.file_name(1), "01_Intro.txt");
        assert_eq!(section.file_name(10), "10_Intro.txt");
        assert_eq!(section.file_name(123), "123_Intro.txt");
    }

    #[test]
    fn test_file_name_sanitizes_title() {
        let section = Section::new("Findings & Risks!", "");
        assert_eq!(section.file_name(2), "02_Findings_Risks.txt");
    }

    #[test]
    fn test_file_name_empty_title() {
        let section = Section::new("???", "");
        assert_eq!(section.file_name(3), "03_.txt");
    }

    #[test]
    fn test_render_keeps_original_title() {
        let section = Section::new("Findings & Risks!", "Risk one.\nRisk two.\n");
        assert_eq!(
            section.render(),
            "Title: Findings & Risks!\nRisk one.\nRisk two.\n"
        );
    }

    #[test]
    fn test_split_report_count() {
        let mut report = SplitReport::new("out");
        assert_eq!(report.count(), 0);
        report.files.push(PathBuf::from("out/01_a.txt"));
        report.files.push(PathBuf::from("out/02_b.txt"));
        assert_eq!(report.count(), 2);
    }
}
