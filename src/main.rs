// src/main.rs
mod config;
mod extractors;
mod lookup;
mod richtext;
mod storage;
mod utils;

use clap::Parser;
use extractors::section::SectionExtractor;
use lookup::LookupTable;
use std::path::PathBuf;
use storage::{SectionOutcome, StorageManager};
use utils::error::LookupError;
use utils::AppError;

/// Command Line Interface for the styled-notes section splitter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON lookup table of keyed notes rows
    #[arg(short, long)]
    table: PathBuf,

    /// Search key identifying the row whose notes get split
    #[arg(short, long)]
    key: String,

    /// Optional JSON file overriding the built-in section markers
    #[arg(short, long)]
    sections: Option<PathBuf>,

    /// Output directory for extracted sections
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Debug mode - save the raw notes text with marker matches annotated
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Load the section marker table (built-in or user-supplied)
    let sections = config::load_sections(args.sections.as_deref())?;
    tracing::info!("Loaded {} section definitions", sections.len());

    // 4. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 5. Initialize section extractor
    let extractor = SectionExtractor::new();

    // 6. Load the lookup table and find the requested row
    let table = LookupTable::load(&args.table)?;
    if table.is_empty() {
        tracing::warn!("Lookup table {} has no rows", args.table.display());
    }
    tracing::info!("Loaded lookup table with {} rows", table.len());

    let notes = table
        .find(&args.key)
        .ok_or_else(|| LookupError::KeyNotFound(args.key.clone()))?;
    tracing::info!("Found notes for '{}' ({} bytes)", args.key, notes.text.len());

    if args.debug {
        let debug_dir = storage.key_dir(&args.key).join("debug");
        std::fs::create_dir_all(&debug_dir)?;

        // Save the raw notes text for debugging
        let raw_path = debug_dir.join("raw_notes.txt");
        std::fs::write(&raw_path, &notes.text)?;
        tracing::info!("Saved raw notes text to: {}", raw_path.display());

        let annotated_path = debug_dir.join("notes_annotated.txt");
        if let Err(e) = utils::text_debug::save_annotated_text(&notes.text, &annotated_path, &sections) {
            tracing::warn!("Failed to create annotated notes text: {}", e);
        }
    }

    // 7. Run the extractor once per section record, in order
    let mut found_count = 0;
    let mut missed_count = 0;
    let mut outcomes = Vec::with_capacity(sections.len());

    for section in &sections {
        match extractor.extract(notes, section) {
            Some(content) => {
                found_count += 1;
                outcomes.push(SectionOutcome {
                    name: section.name.clone(),
                    found: true,
                    text_len: content.text.len(),
                    run_count: content.runs.len(),
                });

                match storage.save_section(&args.key, &section.name, &content) {
                    Ok(path) => tracing::info!("Saved section content to: {}", path.display()),
                    Err(e) => tracing::error!("Failed to save section content: {}", e),
                }
            }
            None => {
                // Absent is a normal outcome: clear the destination so no
                // stale section from an earlier run survives.
                missed_count += 1;
                outcomes.push(SectionOutcome {
                    name: section.name.clone(),
                    found: false,
                    text_len: 0,
                    run_count: 0,
                });

                match storage.clear_section(&args.key, &section.name) {
                    Ok(true) => tracing::info!("Cleared stale '{}' destination", section.name),
                    Ok(false) => tracing::debug!("No '{}' destination to clear", section.name),
                    Err(e) => tracing::error!("Failed to clear '{}' destination: {}", section.name, e),
                }
            }
        }
    }

    // 8. Record the run summary
    match storage.save_run_metadata(&args.key, &outcomes) {
        Ok(path) => tracing::info!("Saved run metadata to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save run metadata: {}", e),
    }

    tracing::info!("Processing finished. Found: {}, Missed: {}", found_count, missed_count);

    if found_count == 0 {
        tracing::warn!(
            "No section markers matched the notes for '{}' - check the marker patterns",
            args.key
        );
    }

    Ok(())
}
