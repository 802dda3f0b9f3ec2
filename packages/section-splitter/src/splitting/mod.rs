//! Marker-based section splitting.
//!
//! A marker is a line of five or more `=` characters, a title line, and
//! another line of `=` characters. Everything between two markers is the
//! body of the section opened by the first one.

mod engine;
mod strategy;
mod types;

pub use engine::SplitEngine;
pub use strategy::{LineScanMarkerStrategy, MarkerStrategy, RegexMarkerStrategy};
pub use types::MarkerSpan;

use crate::types::Section;

/// Split a report into sections using the default regex strategy.
///
/// Always returns at least one section.
///
/// # Examples
/// ```
/// use section_splitter::splitting::split_sections;
///
/// let sections = split_sections("=====\nIntro\n=====\nHello world.\n");
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].title, "Intro");
/// assert_eq!(sections[0].body, "Hello world.\n");
/// ```
pub fn split_sections(text: &str) -> Vec<Section> {
    SplitEngine::new(RegexMarkerStrategy).split(text)
}
