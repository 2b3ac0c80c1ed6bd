// System status display: configured references, cache store, build time.

use anyhow::Result;
use colored::Colorize;

use crate::cache::{CacheStore, JsonFileStore};
use crate::config::{reference_id, Config};

/// Display system status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    println!("{}", "References:".bold());
    if config.references.is_empty() {
        println!("  none configured");
    }
    for path in &config.references {
        let marker = if path.exists() {
            "ok".green()
        } else {
            "missing".red()
        };
        println!("  {:<7} {}", marker, reference_id(path));
    }

    let store = JsonFileStore::new(config.cache_path.clone());
    if !store.exists() {
        println!("\nCache: not built ({})", store.location());
        println!("  Run `docmatch build` or `docmatch compare <file>` to build it");
        return Ok(());
    }

    let file_size = std::fs::metadata(store.path())
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("\nCache: {} ({})", store.location(), file_size);

    match store.load()? {
        Some(stored) => {
            println!(
                "  Built: {}",
                stored.built_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            for entry in &stored.references {
                println!("  {:<40} {} words", entry.id, entry.tokens.len());
            }
            if !stored.ids().eq(config.reference_ids().iter().map(String::as_str)) {
                println!(
                    "  {}",
                    "Cached references differ from configured ones; next run will rebuild."
                        .yellow()
                );
            }
        }
        None => {
            println!(
                "  {}",
                "Store is unreadable or from another version; next run will rebuild.".yellow()
            );
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
