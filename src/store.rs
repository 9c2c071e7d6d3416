use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open {} for appending: {source}", path.display())]
    Open { path: PathBuf, source: std::io::Error },
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write to {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Counts from one merge, for operator-facing reporting.
#[derive(Debug)]
pub struct MergeOutcome {
    pub appended: usize,
    pub skipped: usize,
    pub known_before: usize,
}

/// Ordered entries currently on file: trimmed, non-empty lines.
/// A missing file is an empty list, not an error.
pub fn read_entries(path: &Path) -> Result<Vec<String>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| StoreError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            entries.push(trimmed.to_string());
        }
    }
    Ok(entries)
}

/// Entries already on file as a lookup set. Duplicate lines in the file
/// collapse harmlessly.
pub fn load_known(path: &Path) -> Result<HashSet<String>> {
    Ok(read_entries(path)?.into_iter().collect())
}

/// Merge candidates into the list file: existing lines stay untouched, new
/// entries are appended in first-seen order, one per line. Candidates are
/// trimmed before comparison; empty ones and repeats within the call are
/// silently collapsed. A write failure aborts the remaining candidates.
///
/// Assumes a single writer process; wrap the read-then-append sequence in an
/// exclusive file lock before pointing multiple processes at one list.
pub fn merge_unique(path: &Path, candidates: &[String]) -> Result<MergeOutcome> {
    let known = load_known(path)?;
    let known_before = known.len();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut appended = 0;
    let mut skipped = 0;
    for name in candidates
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .unique()
    {
        if known.contains(name) {
            skipped += 1;
            continue;
        }
        writeln!(file, "{name}").map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
        appended += 1;
    }

    debug!(appended, skipped, path = %path.display(), "merge complete");
    Ok(MergeOutcome {
        appended,
        skipped,
        known_before,
    })
}
