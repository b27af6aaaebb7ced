//! Decoding of slide outlines returned by a language model.
//!
//! The model is asked for a JSON object shaped like [`SlideDeck`]:
//!
//! ```json
//! {"title": "...", "slides": [{"title": "...", "code": "...", "points": ["..."]}]}
//! ```
//!
//! Even in JSON mode it occasionally wraps the object in a fenced block, so
//! fence markers are removed before decoding.

use crate::error::{Error, Result};
use crate::types::SlideDeck;
use log::{debug, error};

/// Remove every ```` ```json ```` and ```` ``` ```` marker from model output.
pub fn strip_json_fences(input: &str) -> String {
    input.replace("```json", "").replace("```", "")
}

/// Decode a model response into a finished deck.
pub fn parse_slides_response(content: &str) -> Result<SlideDeck> {
    let cleaned = strip_json_fences(content.trim());

    let mut deck: SlideDeck = serde_json::from_str(cleaned.trim()).map_err(|e| {
        error!("Could not decode slides response: {}", e);
        Error::ResponseFormat(e.to_string())
    })?;

    deck.mark_section_headers();
    debug!("Decoded slides response with {} slide(s)", deck.len());
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_DECK_TITLE;

    #[test]
    fn test_strip_json_fences() {
        assert_eq!(strip_json_fences("```json\n{}\n```"), "\n{}\n");
        assert_eq!(strip_json_fences("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_plain_response() {
        let content = r#"{
            "title": "Rust",
            "slides": [
                {"title": "Ownership", "points": ["moves", "borrows"]},
                {"title": "Example", "code": "fn main() {}"}
            ]
        }"#;

        let deck = parse_slides_response(content).unwrap();

        assert_eq!(deck.title, "Rust");
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].points, vec!["moves", "borrows"]);
        assert!(!deck.slides[0].section_header);
        assert_eq!(deck.slides[1].code.as_deref(), Some("fn main() {}"));
        assert!(deck.slides[1].section_header);
    }

    #[test]
    fn test_parse_fenced_response() {
        let content = "```json\n{\"title\": \"T\", \"slides\": [{\"title\": \"A\", \"points\": [\"x\"]}]}\n```";

        let deck = parse_slides_response(content).unwrap();

        assert_eq!(deck.title, "T");
        assert_eq!(deck.slides[0].title, "A");
    }

    #[test]
    fn test_section_header_recomputed() {
        let content = r#"{"title": "T", "slides": [{"title": "A", "points": ["x"], "sectionHeader": true}]}"#;

        let deck = parse_slides_response(content).unwrap();

        assert!(!deck.slides[0].section_header);
    }

    #[test]
    fn test_missing_title_defaults() {
        let deck = parse_slides_response(r#"{"slides": []}"#).unwrap();

        assert_eq!(deck.title, DEFAULT_DECK_TITLE);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_malformed_response() {
        let err = parse_slides_response("Sure! Here is your outline.").unwrap_err();

        assert!(matches!(err, Error::ResponseFormat(_)));
    }
}
