// src/config/mod.rs
use crate::utils::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One section record: a destination name plus the boundary marker patterns.
/// The extracted span starts just after the first `start_pattern` match and
/// ends just before the first `stop_pattern` match in the remainder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSpec {
    pub name: String,
    pub start_pattern: String,
    pub stop_pattern: String,
}

/// A section record with its patterns compiled, ready for extraction.
#[derive(Debug)]
pub struct CompiledSection {
    pub name: String,
    pub start: Regex,
    pub stop: Regex,
}

impl SectionSpec {
    fn new(name: &str, start_pattern: &str, stop_pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            start_pattern: start_pattern.to_string(),
            stop_pattern: stop_pattern.to_string(),
        }
    }

    pub fn compile(&self) -> Result<CompiledSection, ConfigError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| ConfigError::BadPattern {
                section: self.name.clone(),
                source: e,
            })
        };
        Ok(CompiledSection {
            name: self.name.clone(),
            start: compile(&self.start_pattern)?,
            stop: compile(&self.stop_pattern)?,
        })
    }
}

// The built-in section table, matching the numbered "N. ▇ Label:" markers
// used in the notes column. Each stop pattern is the next numbered marker;
// the last one never matches, so the final section runs to end of text.
static DEFAULT_SECTIONS: Lazy<Vec<SectionSpec>> = Lazy::new(|| {
    vec![
        SectionSpec::new("appraiser", r"1\.\s*▇\s*Appraiser:", r"2\.\s*▇"),
        SectionSpec::new("taxes", r"2\.\s*▇\s*Taxes:", r"3\.\s*▇"),
        SectionSpec::new("insurance", r"3\.\s*▇\s*Insurance:", r"4\.\s*▇"),
        SectionSpec::new("hoa", r"4\.\s*▇\s*HOA:", r"5\.\s*▇"),
        SectionSpec::new("utilities", r"5\.\s*▇\s*Utilities:", r"6\.\s*▇"),
        SectionSpec::new("repairs", r"6\.\s*▇\s*Repairs:", r"7\.\s*▇"),
    ]
});

/// Loads the section table from a JSON file, or falls back to the built-in
/// six-section table when no path is given. Patterns are compiled here so a
/// bad regex surfaces as a configuration error, not an extraction failure.
pub fn load_sections(path: Option<&Path>) -> Result<Vec<CompiledSection>, ConfigError> {
    let specs = match path {
        Some(p) => {
            tracing::info!("Loading section config from {}", p.display());
            let raw = fs::read_to_string(p)?;
            parse_sections(&raw)?
        }
        None => {
            tracing::debug!("Using built-in section table");
            DEFAULT_SECTIONS.clone()
        }
    };
    specs.iter().map(SectionSpec::compile).collect()
}

fn parse_sections(raw: &str) -> Result<Vec<SectionSpec>, ConfigError> {
    let specs: Vec<SectionSpec> =
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
    if specs.is_empty() {
        return Err(ConfigError::NoSections);
    }
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_six_compilable_sections() {
        let sections = load_sections(None).unwrap();
        assert_eq!(sections.len(), 6);
        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["appraiser", "taxes", "insurance", "hoa", "utilities", "repairs"]
        );
    }

    #[test]
    fn builtin_markers_match_the_notes_format() {
        let sections = load_sections(None).unwrap();
        let text = "1. ▇ Appraiser: call 2. ▇ Taxes: paid";
        assert!(sections[0].start.is_match(text));
        assert!(sections[0].stop.is_match(text));
        assert!(!sections[2].start.is_match(text));
    }

    #[test]
    fn parses_section_table_from_json() {
        let raw = r#"[
            {"name": "summary", "start_pattern": "^SUMMARY:", "stop_pattern": "^DETAILS:"}
        ]"#;
        let specs = parse_sections(raw).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name, "summary");
        assert!(specs[0].compile().is_ok());
    }

    #[test]
    fn empty_section_table_is_rejected() {
        assert!(matches!(parse_sections("[]"), Err(ConfigError::NoSections)));
    }

    #[test]
    fn bad_pattern_is_a_config_error() {
        let spec = SectionSpec::new("broken", r"([unclosed", r"x");
        match spec.compile() {
            Err(ConfigError::BadPattern { section, .. }) => assert_eq!(section, "broken"),
            other => panic!("expected BadPattern, got {:?}", other.map(|_| ())),
        }
    }
}
