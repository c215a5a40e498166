// src/richtext/mod.rs
#![allow(dead_code)]
use crate::utils::error::RichTextError;
use serde::{Deserialize, Serialize};

/// Plain text plus an ordered list of formatting runs over it.
///
/// Runs are non-overlapping, sorted by start offset, and may cover only a
/// subset of the text; gaps between runs are unstyled. Offsets are UTF-8
/// byte offsets into `text`, which matches Rust string indexing and the
/// match positions reported by the `regex` crate. Once constructed a
/// `StyledText` is never mutated; the extractor produces a fresh copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    pub text: String,
    #[serde(default)]
    pub runs: Vec<StyleRun>,
}

/// A half-open byte range `[start, end)` carrying one style descriptor and
/// an optional hyperlink target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRun {
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub style: RunStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Style properties for a single run, modeled after spreadsheet rich-text
/// attributes. All fields optional; `None` means "inherit the cell default".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
}

impl StyledText {
    /// Creates an unstyled text blob.
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Checks the run invariants: each run is non-empty, in bounds, aligned
    /// to character boundaries, and runs are sorted and non-overlapping.
    pub fn validate(&self) -> Result<(), RichTextError> {
        let mut prev_end = 0usize;
        for run in &self.runs {
            if run.start >= run.end {
                return Err(RichTextError::EmptyRun {
                    start: run.start,
                    end: run.end,
                });
            }
            if run.end > self.text.len() {
                return Err(RichTextError::OutOfBounds {
                    start: run.start,
                    end: run.end,
                    len: self.text.len(),
                });
            }
            if !self.text.is_char_boundary(run.start) || !self.text.is_char_boundary(run.end) {
                return Err(RichTextError::NotCharBoundary {
                    start: run.start,
                    end: run.end,
                });
            }
            // Sorted + non-overlapping collapse into one check against the
            // previous run's end.
            if run.start < prev_end {
                return Err(RichTextError::Overlap {
                    start: run.start,
                    prev_end,
                });
            }
            prev_end = run.end;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> RunStyle {
        RunStyle {
            bold: Some(true),
            ..RunStyle::default()
        }
    }

    fn run(start: usize, end: usize) -> StyleRun {
        StyleRun {
            start,
            end,
            style: bold(),
            link: None,
        }
    }

    #[test]
    fn validate_accepts_sorted_disjoint_runs() {
        let styled = StyledText {
            text: "hello world".to_string(),
            runs: vec![run(0, 5), run(6, 11)],
        };
        assert!(styled.validate().is_ok());
    }

    #[test]
    fn validate_accepts_unstyled_text() {
        assert!(StyledText::plain("no runs at all").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_run() {
        let styled = StyledText {
            text: "hello".to_string(),
            runs: vec![run(3, 3)],
        };
        assert!(matches!(
            styled.validate(),
            Err(RichTextError::EmptyRun { start: 3, end: 3 })
        ));
    }

    #[test]
    fn validate_rejects_run_past_end_of_text() {
        let styled = StyledText {
            text: "hello".to_string(),
            runs: vec![run(2, 9)],
        };
        assert!(matches!(
            styled.validate(),
            Err(RichTextError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn validate_rejects_overlapping_runs() {
        let styled = StyledText {
            text: "hello world".to_string(),
            runs: vec![run(0, 6), run(4, 11)],
        };
        assert!(matches!(
            styled.validate(),
            Err(RichTextError::Overlap { start: 4, prev_end: 6 })
        ));
    }

    #[test]
    fn validate_rejects_unsorted_runs() {
        let styled = StyledText {
            text: "hello world".to_string(),
            runs: vec![run(6, 11), run(0, 5)],
        };
        // Unsorted runs trip the same overlap check.
        assert!(matches!(
            styled.validate(),
            Err(RichTextError::Overlap { .. })
        ));
    }

    #[test]
    fn validate_rejects_mid_character_offsets() {
        // "▇" is three bytes; offset 1 lands inside it.
        let styled = StyledText {
            text: "▇ marker".to_string(),
            runs: vec![run(1, 4)],
        };
        assert!(matches!(
            styled.validate(),
            Err(RichTextError::NotCharBoundary { .. })
        ));
    }

    #[test]
    fn deserializes_row_without_runs_field() {
        let styled: StyledText = serde_json::from_str(r#"{"text": "bare"}"#).unwrap();
        assert_eq!(styled.text, "bare");
        assert!(styled.runs.is_empty());
    }

    #[test]
    fn serializes_plain_run_without_style_noise() {
        let styled = StyledText {
            text: "link".to_string(),
            runs: vec![StyleRun {
                start: 0,
                end: 4,
                style: RunStyle::default(),
                link: Some("https://example.com".to_string()),
            }],
        };
        let json = serde_json::to_string(&styled).unwrap();
        assert!(json.contains("https://example.com"));
        assert!(!json.contains("fontFamily"));
    }
}
