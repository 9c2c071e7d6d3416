use regex::Regex;

/// Compiled start/end line recognizers for the delimited block.
///
/// A line counts as a marker when, after trimming, it is nothing but an
/// optional run of digits, optional whitespace, and the keyword itself.
/// "3 playnitegames" is a marker line; "playnitegames end" is not.
pub struct Markers {
    start: Regex,
    end: Regex,
    start_word: String,
    end_word: String,
}

impl Markers {
    pub fn new(start_word: &str, end_word: &str) -> Self {
        Markers {
            start: keyword_line(start_word),
            end: keyword_line(end_word),
            start_word: start_word.to_string(),
            end_word: end_word.to_string(),
        }
    }

    pub fn is_start(&self, trimmed: &str) -> bool {
        self.start.is_match(trimmed)
    }

    pub fn is_end(&self, trimmed: &str) -> bool {
        self.end.is_match(trimmed)
    }

    /// Exact keyword equality, for the normalizer's filter.
    pub fn is_keyword(&self, name: &str) -> bool {
        name == self.start_word || name == self.end_word
    }
}

fn keyword_line(word: &str) -> Regex {
    Regex::new(&format!(r"^\d*\s*{}$", regex::escape(word))).unwrap()
}

/// Collect the non-empty lines strictly between the first start marker and
/// the first end marker after it.
///
/// Lines before the first start marker are ignored, end markers included.
/// A repeated start marker while recording is skipped like the first one;
/// recording does not reset or nest. Without an end marker the block runs
/// to the end of input.
pub fn extract_block(raw: &str, markers: &Markers) -> Vec<String> {
    let mut names = Vec::new();
    let mut recording = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if markers.is_start(trimmed) {
            recording = true;
            continue;
        }
        if !recording {
            continue;
        }
        if markers.is_end(trimmed) {
            break;
        }
        if !trimmed.is_empty() {
            names.push(trimmed.to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Markers {
        Markers::new("playnitegames", "playnitegamesend")
    }

    #[test]
    fn no_start_marker() {
        assert!(extract_block("foo\nbar\nbaz", &markers()).is_empty());
    }

    #[test]
    fn between_markers() {
        let raw = "noise\nplaynitegames\nA\nB\nplaynitegamesend\ntrailing";
        assert_eq!(extract_block(raw, &markers()), vec!["A", "B"]);
    }

    #[test]
    fn trailing_content_never_leaks() {
        for trailing in ["", "junk", "playnitegames\nC"] {
            let raw = format!("playnitegames\nA\nplaynitegamesend\n{trailing}");
            assert_eq!(extract_block(&raw, &markers()), vec!["A"]);
        }
    }

    #[test]
    fn missing_end_runs_to_eof() {
        let raw = "playnitegames\nA\n\nB";
        assert_eq!(extract_block(raw, &markers()), vec!["A", "B"]);
    }

    #[test]
    fn blank_lines_inside_block_dropped() {
        let raw = "playnitegames\n\nA\n   \nB\nplaynitegamesend";
        assert_eq!(extract_block(raw, &markers()), vec!["A", "B"]);
    }

    #[test]
    fn numeric_prefix_on_marker_lines() {
        let raw = "3 playnitegames\nA\n12 playnitegamesend\nB";
        assert_eq!(extract_block(raw, &markers()), vec!["A"]);
    }

    #[test]
    fn indented_marker_lines_match() {
        let raw = "  playnitegames\n  A  \n\t playnitegamesend";
        assert_eq!(extract_block(raw, &markers()), vec!["A"]);
    }

    #[test]
    fn keyword_with_suffix_is_not_a_marker() {
        let m = markers();
        assert!(m.is_start("playnitegames"));
        assert!(m.is_start("3 playnitegames"));
        assert!(!m.is_start("playnitegamesxyz"));
        assert!(!m.is_start("playnitegames end"));
    }

    #[test]
    fn repeated_start_keeps_recording() {
        let raw = "playnitegames\nA\nplaynitegames\nB\nplaynitegamesend";
        assert_eq!(extract_block(raw, &markers()), vec!["A", "B"]);
    }

    #[test]
    fn end_marker_before_start_is_ignored() {
        let raw = "playnitegamesend\nplaynitegames\nA\nplaynitegamesend";
        assert_eq!(extract_block(raw, &markers()), vec!["A"]);
    }
}
