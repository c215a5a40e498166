// src/utils/text_debug.rs
use crate::config::CompiledSection;
use crate::utils::error::AppError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Saves a copy of the notes text with every marker match wrapped in
/// visible `«label»...«/»` brackets, for eyeballing why a section did or
/// did not extract.
pub fn save_annotated_text(
    text: &str,
    path: &Path,
    sections: &[CompiledSection],
) -> Result<(), AppError> {
    // Find all matches for each marker and collect them as highlights
    let mut highlights: Vec<(usize, usize, String)> = Vec::new();
    for section in sections {
        for mat in section.start.find_iter(text) {
            highlights.push((mat.start(), mat.end(), format!("{} start", section.name)));
        }
        for mat in section.stop.find_iter(text) {
            highlights.push((mat.start(), mat.end(), format!("{} stop", section.name)));
        }
    }
    highlights.sort_by_key(|h| (h.0, h.1));

    let mut annotated = String::with_capacity(text.len() + highlights.len() * 16);
    let mut last_pos = 0;
    for (start, end, label) in highlights {
        // Distinct sections share stop markers, so matches can coincide;
        // keep the first and skip anything overlapping it.
        if start < last_pos {
            continue;
        }
        annotated.push_str(&text[last_pos..start]);
        annotated.push_str(&format!("«{}»", label));
        annotated.push_str(&text[start..end]);
        annotated.push_str("«/»");
        last_pos = end;
    }
    annotated.push_str(&text[last_pos..]);

    let mut file = File::create(path)?;
    file.write_all(annotated.as_bytes())?;

    tracing::info!("Saved annotated notes text to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_sections;

    #[test]
    fn annotates_marker_matches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annotated.txt");
        let sections = load_sections(None).unwrap();
        let text = "1. ▇ Appraiser: call 2. ▇ Taxes: paid";

        save_annotated_text(text, &path, &sections).unwrap();
        let annotated = std::fs::read_to_string(&path).unwrap();

        assert!(annotated.contains("«appraiser start»1. ▇ Appraiser:«/» call"));
        // The taxes start marker overlaps the appraiser stop marker; only
        // the first annotation at that position survives.
        assert!(annotated.contains("«appraiser stop»2. ▇«/» Taxes: paid"));
    }
}
