use std::sync::LazyLock;

use regex::Regex;

use super::block::Markers;

static NUM_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s*").unwrap());

/// Strip list numbering from each line: trim, then drop one leading run of
/// digits plus any whitespace after it. Anchored, so digits inside a name
/// ("Left 4 Dead") are untouched.
///
/// Lines that end up empty, or that turn out to be a bare marker keyword
/// the extractor let through, are discarded. Order is preserved and nothing
/// is deduplicated here.
pub fn clean_names(lines: &[String], markers: &Markers) -> Vec<String> {
    let mut cleaned = Vec::new();
    for line in lines {
        let name = NUM_PREFIX_RE.replace(line.trim(), "");
        if !name.is_empty() && !markers.is_keyword(&name) {
            cleaned.push(name.into_owned());
        }
    }
    cleaned
}
