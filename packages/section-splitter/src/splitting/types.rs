//! Types for the section splitting system.

/// Location of one marker in the input text.
///
/// Offsets are byte positions into the text the marker was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpan {
    /// Start of the opening `=` line.
    pub start: usize,

    /// Position just past the newline of the closing `=` line.
    pub end: usize,

    /// Raw title line, without its line terminator.
    pub title: String,
}

impl MarkerSpan {
    /// Create a new marker span.
    #[must_use]
    pub fn new(start: usize, end: usize, title: impl Into<String>) -> Self {
        Self {
            start,
            end,
            title: title.into(),
        }
    }
}
