use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// The one function the excluded automation collaborator exposes: produce
/// the raw page text. Reads a scraped-text dump file when a path is given,
/// stdin otherwise. Failures here mean the pipeline never runs; the core
/// does not try to interpret them.
pub fn fetch_raw_text(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read raw text dump {}", path.display()))?;
            info!(chars = raw.len(), path = %path.display(), "loaded raw text");
            Ok(raw)
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read raw text from stdin")?;
            info!(chars = raw.len(), "read raw text from stdin");
            Ok(raw)
        }
    }
}
