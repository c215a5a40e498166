// src/extractors/section.rs

// --- Imports ---
use crate::config::CompiledSection;
use crate::richtext::{StyleRun, StyledText};
use regex::Regex;

/// Extracts the styled span between a start marker and a stop marker.
///
/// The start pattern is matched against the whole source text and the
/// section begins immediately after its first match. The stop pattern is
/// matched against the remainder only; if it never matches, the section
/// runs to the end of the text. Boundary whitespace is trimmed inward,
/// never interior content. Style runs overlapping the extracted span are
/// clipped to it and re-based to the new text's coordinates, with the
/// style descriptor and link target copied unchanged.
///
/// Returns `None` when the start marker is missing or the span is empty
/// after trimming. That is the only non-success outcome; callers treat it
/// as "clear the destination". Pure function of its inputs, no I/O.
pub fn extract_section(source: &StyledText, start: &Regex, stop: &Regex) -> Option<StyledText> {
    let start_match = start.find(&source.text)?;
    let mut start_idx = start_match.end();

    let mut end_idx = match stop.find(&source.text[start_idx..]) {
        Some(stop_match) => start_idx + stop_match.start(),
        None => source.text.len(),
    };

    // Trim boundary whitespace inward. When the span is all whitespace the
    // indices cross and the emptiness check below catches it.
    let span = &source.text[start_idx..end_idx];
    start_idx += span.len() - span.trim_start().len();
    end_idx -= span.len() - span.trim_end().len();
    if end_idx <= start_idx {
        return None;
    }

    let mut runs = Vec::new();
    for run in &source.runs {
        let clip_start = run.start.max(start_idx);
        let clip_end = run.end.min(end_idx);
        if clip_start < clip_end {
            runs.push(StyleRun {
                start: clip_start - start_idx,
                end: clip_end - start_idx,
                style: run.style.clone(),
                link: run.link.clone(),
            });
        }
    }

    Some(StyledText {
        text: source.text[start_idx..end_idx].to_string(),
        runs,
    })
}

// --- Main Extractor Structure ---
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self {
        Self {}
    }

    /// Runs the extraction for one configured section, with logging.
    pub fn extract(&self, source: &StyledText, section: &CompiledSection) -> Option<StyledText> {
        tracing::debug!(
            "Extracting section '{}' (start: /{}/, stop: /{}/)",
            section.name,
            section.start.as_str(),
            section.stop.as_str()
        );

        match extract_section(source, &section.start, &section.stop) {
            Some(content) => {
                tracing::info!(
                    "Extracted section '{}': {} bytes, {} styled runs",
                    section.name,
                    content.text.len(),
                    content.runs.len()
                );
                Some(content)
            }
            None => {
                tracing::debug!("Section '{}' not found in source text", section.name);
                None
            }
        }
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}
