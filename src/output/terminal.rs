// Colored terminal output for comparison results and cache state.
//
// This module handles all terminal-specific formatting: colors, tables, and
// the score bar column. The main.rs commands delegate here.

use std::io::{self, Write};

use colored::Colorize;

use crate::cache::{CacheOrigin, ReferenceCache};
use crate::compare::ComparisonReport;
use crate::error::{ConfigurationError, ExtractionError};

/// Width of the score bar at 100%.
const BAR_WIDTH: usize = 25;

/// Reference ids longer than this are truncated in the table.
const MAX_REFERENCE_WIDTH: usize = 40;

/// Display a comparison table, best match, and any extraction warning.
pub fn display_comparison(report: &ComparisonReport) {
    if let Some(warning) = &report.warning {
        display_warning(warning);
    }

    println!(
        "\n{}",
        format!(
            "=== Similarity for {} ({} distinct words) ===",
            report.document, report.token_count
        )
        .bold()
    );
    println!();

    if report.result.is_empty() {
        println!("  No references to compare against.");
        return;
    }

    println!(
        "  {:<42} {:>14}",
        "Reference File".dimmed(),
        "Similarity (%)".dimmed(),
    );
    println!("  {}", "-".repeat(42 + 1 + 14 + 2 + BAR_WIDTH + 2).dimmed());

    for entry in &report.result.scores {
        let name = super::truncate_chars(&entry.reference, MAX_REFERENCE_WIDTH);
        println!(
            "  {:<42} {:>14.2}  {}",
            name,
            entry.score,
            score_bar(entry.score)
        );
    }

    if let Some(best) = report.result.best_match() {
        println!();
        println!(
            "  {} {} ({:.2} %)",
            "Highest similarity:".bold(),
            best.reference.bold(),
            best.score
        );
    }
}

/// Display every missing reference, then how to proceed, on stderr.
pub fn display_missing_references(err: &ConfigurationError) {
    let _ = write_missing_references(&mut std::io::stderr().lock(), err);
}

fn write_missing_references(out: &mut impl Write, err: &ConfigurationError) -> io::Result<()> {
    match err {
        ConfigurationError::MissingReferences(missing) => {
            writeln!(
                out,
                "{}",
                "The following reference files are missing:".red().bold()
            )?;
            for id in missing {
                writeln!(out, "  {} {}", "x".red(), id.bold())?;
            }
            writeln!(
                out,
                "\n{}",
                "Add them, or point DOCMATCH_REFERENCES / --reference at the right files.".dimmed()
            )?;
        }
        ConfigurationError::NoReferences => {
            writeln!(out, "{}", "No reference files configured.".red().bold())?;
            writeln!(
                out,
                "{}",
                "Set DOCMATCH_REFERENCES or pass --reference.".dimmed()
            )?;
        }
    }
    Ok(())
}

/// Summarize a ready cache: how many references, and whether it was loaded.
pub fn display_cache_ready(cache: &ReferenceCache) {
    match cache.origin() {
        CacheOrigin::Loaded => println!(
            "{} Loaded {} reference(s) from cache (built {})",
            "ok".green(),
            cache.len(),
            cache.built_at().format("%Y-%m-%d %H:%M:%S UTC")
        ),
        CacheOrigin::Built => println!(
            "{} Processed {} reference(s) and saved the cache",
            "ok".green(),
            cache.len()
        ),
    }

    for warning in cache.warnings() {
        display_warning(warning);
    }
}

/// Display one extraction failure as a warning line.
pub fn display_warning(err: &ExtractionError) {
    println!(
        "  {} {} (treated as empty text)",
        "Warning:".yellow(),
        err
    );
}

/// Render a score as a fixed-width bar, colored by strength.
fn score_bar(score: f64) -> String {
    let filled = ((score / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled)
    );

    if score >= 50.0 {
        bar.bright_red().to_string()
    } else if score >= 20.0 {
        bar.bright_yellow().to_string()
    } else {
        bar.bright_blue().to_string()
    }
}
