//! Marker detection strategies.

use std::sync::LazyLock;

use regex::Regex;

use super::types::MarkerSpan;
use crate::config::MIN_MARKER_LEN;

/// Trait for locating section markers in a report.
///
/// Implementations must return non-overlapping markers in source order.
pub trait MarkerStrategy {
    /// Find all markers in `text`.
    fn find_markers(&self, text: &str) -> Vec<MarkerSpan>;
}

/// Marker pattern: `=` line, non-empty title line, `=` line.
///
/// Lines may end in `\r\n`. The closing line must be newline-terminated.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^={{{MIN_MARKER_LEN},}}\r?\n(?P<title>.+?)\r?\n={{{MIN_MARKER_LEN},}}\r?\n"
    ))
    .expect("valid regex")
});

/// Strategy that finds markers with a multi-line regular expression.
///
/// This is the default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMarkerStrategy;

impl MarkerStrategy for RegexMarkerStrategy {
    fn find_markers(&self, text: &str) -> Vec<MarkerSpan> {
        MARKER_PATTERN
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let title = caps.name("title")?;
                Some(MarkerSpan::new(whole.start(), whole.end(), title.as_str()))
            })
            .collect()
    }
}

/// Strategy that finds markers by scanning the text line by line.
///
/// Produces exactly the same markers as [`RegexMarkerStrategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScanMarkerStrategy;

/// Scanner state while looking for a marker.
#[derive(Debug, Clone, Copy)]
enum ScanState {
    SeekingOpenMarker,
    /// Opening `=` line found at this line index.
    ReadingTitle { open: usize },
    /// Opening line and title line found.
    SeekingCloseMarker { open: usize, title: usize },
}

/// One line of the input with its byte range.
#[derive(Debug)]
struct Line<'a> {
    start: usize,
    /// Just past the `\n`, or end of text for an unterminated last line.
    end: usize,
    /// Line text without the `\n`.
    content: &'a str,
    terminated: bool,
}

impl<'a> Line<'a> {
    fn split_all(text: &'a str) -> Vec<Self> {
        let mut offset = 0;
        text.split_inclusive('\n')
            .map(|raw| {
                let start = offset;
                offset += raw.len();
                let (content, terminated) = match raw.strip_suffix('\n') {
                    Some(content) => (content, true),
                    None => (raw, false),
                };
                Line {
                    start,
                    end: offset,
                    content,
                    terminated,
                }
            })
            .collect()
    }

    /// A run of `=` characters, optionally followed by `\r`, ending in `\n`.
    fn is_marker(&self) -> bool {
        let content = self.content.strip_suffix('\r').unwrap_or(self.content);
        self.terminated
            && content.len() >= MIN_MARKER_LEN
            && content.bytes().all(|b| b == b'=')
    }

    fn is_title(&self) -> bool {
        self.terminated && !self.content.is_empty()
    }

    /// Title text with one trailing `\r` removed, unless it is all there is.
    fn title(&self) -> &'a str {
        if self.content.len() > 1 {
            self.content.strip_suffix('\r').unwrap_or(self.content)
        } else {
            self.content
        }
    }
}

impl MarkerStrategy for LineScanMarkerStrategy {
    fn find_markers(&self, text: &str) -> Vec<MarkerSpan> {
        let lines = Line::split_all(text);
        let mut markers = Vec::new();
        let mut state = ScanState::SeekingOpenMarker;
        let mut i = 0;

        while let Some(line) = lines.get(i) {
            state = match state {
                ScanState::SeekingOpenMarker => {
                    if line.is_marker() {
                        ScanState::ReadingTitle { open: i }
                    } else {
                        ScanState::SeekingOpenMarker
                    }
                }
                ScanState::ReadingTitle { open } => {
                    if line.is_title() {
                        ScanState::SeekingCloseMarker { open, title: i }
                    } else {
                        // Retry from the line after the failed opening line
                        i = open;
                        ScanState::SeekingOpenMarker
                    }
                }
                ScanState::SeekingCloseMarker { open, title } => {
                    if line.is_marker() {
                        markers.push(MarkerSpan::new(
                            lines[open].start,
                            line.end,
                            lines[title].title(),
                        ));
                    } else {
                        i = open;
                    }
                    ScanState::SeekingOpenMarker
                }
            };
            i += 1;
        }

        markers
    }
}
