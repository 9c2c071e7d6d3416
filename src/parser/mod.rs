pub mod block;
pub mod clean;

pub use block::Markers;

/// Two-pass pipeline: raw page text → delimited block → cleaned names.
pub fn extract_names(raw: &str, markers: &Markers) -> Vec<String> {
    let lines = block::extract_block(raw, markers);
    clean::clean_names(&lines, markers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Markers {
        Markers::new("playnitegames", "playnitegamesend")
    }

    #[test]
    fn pipeline_extracts_and_cleans() {
        let raw = "Here you go:\nplaynitegames\n1 Hollow Knight\n2 Hades II\nplaynitegamesend\nAnything else?";
        assert_eq!(
            extract_names(raw, &markers()),
            vec!["Hollow Knight", "Hades II"]
        );
    }

    #[test]
    fn no_block_means_no_names() {
        let raw = "The image shows several games.\nWould you like a list?";
        assert!(extract_names(raw, &markers()).is_empty());
    }

    #[test]
    fn chat_reply_fixture() {
        let raw = std::fs::read_to_string("tests/fixtures/chat_reply.txt").unwrap();
        let names = extract_names(&raw, &markers());
        assert_eq!(
            names,
            vec![
                "Hollow Knight: Silksong",
                "Elden Ring",
                "Clair Obscur: Expedition 33",
                "Hades II",
                "Silent Hill 2",
            ]
        );
    }
}
