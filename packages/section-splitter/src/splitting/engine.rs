//! Split engine that turns marker positions into sections.

use super::strategy::MarkerStrategy;
use crate::config::FALLBACK_TITLE;
use crate::types::Section;

/// Engine for splitting a report into sections.
///
/// Uses a [`MarkerStrategy`] to find the markers, then cuts the text
/// between consecutive markers into section bodies.
pub struct SplitEngine<S: MarkerStrategy> {
    strategy: S,
}

impl<S: MarkerStrategy> SplitEngine<S> {
    /// Create a new split engine.
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Split `text` into sections, in source order.
    ///
    /// Text before the first marker belongs to no section. Without any
    /// marker the whole text becomes a single [`FALLBACK_TITLE`] section.
    pub fn split(&self, text: &str) -> Vec<Section> {
        let markers = self.strategy.find_markers(text);
        tracing::debug!(markers = markers.len(), "Located section markers");

        if markers.is_empty() {
            tracing::warn!("No section markers found, keeping the full report as one section");
            return vec![Section::new(FALLBACK_TITLE, text)];
        }

        markers
            .iter()
            .enumerate()
            .map(|(i, marker)| {
                let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
                let body = format!("{}\n", text[marker.end..end].trim_end());
                Section::new(marker.title.trim(), body)
            })
            .collect()
    }
}
