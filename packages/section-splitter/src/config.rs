//! Configuration constants and the title sanitizer.

use std::path::{Path, PathBuf};

/// Minimum number of `=` characters that make up a marker line.
pub const MIN_MARKER_LEN: usize = 5;

/// Maximum length of a sanitized title, in characters.
pub const MAX_TITLE_LEN: usize = 80;

/// Title of the single section produced when the input has no markers.
pub const FALLBACK_TITLE: &str = "full_report";

/// Name of the output directory created next to the input file.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "sections";

/// Prefix of the first line of every section file.
pub const TITLE_PREFIX: &str = "Title: ";

/// Sanitize a section title into a token that is safe to use in a filename.
///
/// Surrounding whitespace is trimmed, every character other than an
/// alphanumeric, `_`, `-` or whitespace is dropped, whitespace runs are
/// collapsed into a single `_` and the result is cut to
/// [`MAX_TITLE_LEN`] characters. The result may be empty.
///
/// # Examples
/// ```
/// use section_splitter::config::sanitize_title;
///
/// assert_eq!(sanitize_title("Network Findings"), "Network_Findings");
/// assert_eq!(sanitize_title("Findings & Risks!"), "Findings_Risks");
/// assert_eq!(sanitize_title("  <>  "), "");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut in_whitespace = false;

    let kept = title
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace());

    for c in kept {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push('_');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }

    // Truncate on a char boundary
    match result.char_indices().nth(MAX_TITLE_LEN) {
        Some((cut, _)) => result[..cut].to_string(),
        None => result,
    }
}

/// Default output directory: a `sections` folder next to the input file.
///
/// `input` must already be absolute; see [`crate::writer::resolve_output_dir`].
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("/"))
        .join(DEFAULT_OUTPUT_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title_plain() {
        assert_eq!(sanitize_title("Intro"), "Intro");
        assert_eq!(sanitize_title("Network Findings"), "Network_Findings");
        assert_eq!(sanitize_title("snake_case-and-dash"), "snake_case-and-dash");
    }

    #[test]
    fn test_sanitize_title_strips_unsafe_characters() {
        assert_eq!(sanitize_title("Findings & Risks!"), "Findings_Risks");
        assert_eq!(sanitize_title("a/b\\c:d*e?f"), "abcdef");
        assert_eq!(sanitize_title("1.2 Scope (draft)"), "12_Scope_draft");
    }

    #[test]
    fn test_sanitize_title_whitespace() {
        assert_eq!(sanitize_title("   padded   "), "padded");
        assert_eq!(sanitize_title("tab\there\nand  spaces"), "tab_here_and_spaces");
        // Whitespace exposed by removing characters is not trimmed again
        assert_eq!(sanitize_title("trailing !"), "trailing_");
    }

    #[test]
    fn test_sanitize_title_empty() {
        assert_eq!(sanitize_title(""), "");
        assert_eq!(sanitize_title("   "), "");
        assert_eq!(sanitize_title("!!!"), "");
    }

    #[test]
    fn test_sanitize_title_keeps_unicode_letters() {
        assert_eq!(sanitize_title("Résumé été"), "Résumé_été");
        assert_eq!(sanitize_title("Überprüfung №5"), "Überprüfung_5");
    }

    #[test]
    fn test_sanitize_title_truncates() {
        let long = "x".repeat(200);
        assert_eq!(sanitize_title(&long).len(), MAX_TITLE_LEN);

        // Multi-byte characters are counted as characters, not bytes
        let wide = "é".repeat(100);
        let sanitized = sanitize_title(&wide);
        assert_eq!(sanitized.chars().count(), MAX_TITLE_LEN);
        assert!(sanitized.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_sanitize_title_idempotent() {
        let repeated = "word ".repeat(40);
        let inputs = [
            "Findings & Risks!",
            "  a  b  c  ",
            "trailing !",
            "Résumé été",
            "___---___",
            repeated.as_str(),
        ];
        for input in inputs {
            let once = sanitize_title(input);
            assert_eq!(sanitize_title(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_sanitize_title_output_alphabet() {
        let sanitized = sanitize_title("Mixed: <tags>, $vars, and ünïcode — dashes");
        assert!(sanitized
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-'));
        assert!(sanitized.chars().count() <= MAX_TITLE_LEN);
    }

    #[test]
    fn test_default_output_dir() {
        let input = Path::new("/reports/2025/audit.txt");
        assert_eq!(
            default_output_dir(input),
            PathBuf::from("/reports/2025/sections")
        );
    }
}
