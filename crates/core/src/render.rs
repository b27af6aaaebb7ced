//! Renderer interface and layout decisions shared by every output backend.
//!
//! A renderer turns a finished [`SlideDeck`] into slides in some host
//! document. The core decides content, order, layout kind and where new
//! slides go. The backend only has to draw them.

use crate::error::{Error, Result};
use crate::types::{SlideDeck, SlideRecord};
use serde::{Deserialize, Serialize};

/// Font family used for code blocks.
pub const CODE_FONT_FAMILY: &str = "Courier";

/// Code blocks longer than this many lines use the small font size.
const LONG_CODE_LINES: usize = 20;

/// Font size in points for short code blocks.
const CODE_FONT_SIZE: u32 = 12;

/// Font size in points for long code blocks.
const SMALL_CODE_FONT_SIZE: u32 = 8;

/// A backend that creates slides in a host document.
pub trait SlideRenderer {
    type Error;

    /// Create the opening slide carrying the deck title.
    fn create_title_slide(&mut self, title: &str) -> std::result::Result<(), Self::Error>;

    /// Create one body slide.
    ///
    /// Points are drawn as a bulleted list and code as a monospaced block.
    /// A section-header slide shows its title only.
    fn create_body_slide(&mut self, slide: &SlideRecord) -> std::result::Result<(), Self::Error>;
}

/// Render a whole deck: the title slide, then each body slide in order.
///
/// Stops at the first error. Slides created before it are left as they are.
pub fn render_deck<R: SlideRenderer>(
    deck: &SlideDeck,
    renderer: &mut R,
) -> std::result::Result<(), R::Error> {
    renderer.create_title_slide(&deck.title)?;
    for slide in &deck.slides {
        renderer.create_body_slide(slide)?;
    }
    log::debug!("Rendered {} body slide(s)", deck.len());
    Ok(())
}

/// Layout used for a created slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    /// Opening slide with the deck title.
    Title,
    /// Title only, no body placeholder.
    SectionHeader,
    /// Title plus a bulleted body.
    TitleAndBody,
}

impl SlideLayout {
    /// Pick the layout for a body slide.
    pub fn for_record(slide: &SlideRecord) -> Self {
        if slide.is_section_header() {
            Self::SectionHeader
        } else {
            Self::TitleAndBody
        }
    }
}

/// How a code block is laid out as a monospaced text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockLayout {
    /// Code lines, with runs of blank lines collapsed.
    pub lines: Vec<String>,

    /// Font size in points.
    pub font_size: u32,
}

impl CodeBlockLayout {
    /// Lay out a code block.
    ///
    /// Returns `None` for code that collapses to a single line; those are
    /// usually stray fragments rather than real listings.
    pub fn from_code(code: &str) -> Option<Self> {
        let lines: Vec<String> = code
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();

        if lines.len() <= 1 {
            return None;
        }

        let font_size = if lines.len() > LONG_CODE_LINES {
            SMALL_CODE_FONT_SIZE
        } else {
            CODE_FONT_SIZE
        };

        Some(Self { lines, font_size })
    }

    /// Font family for the code text box.
    pub fn font_family(&self) -> &'static str {
        CODE_FONT_FAMILY
    }
}

/// Where newly created slides go relative to the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlidePlacement {
    /// After the last existing slide.
    #[default]
    End,
    /// Directly after the slide at this index (the one active before conversion).
    After(usize),
}

impl SlidePlacement {
    /// Index at which the first new slide is inserted.
    pub fn insertion_index(&self, existing_len: usize) -> Result<usize> {
        match *self {
            SlidePlacement::End => Ok(existing_len),
            SlidePlacement::After(idx) if idx < existing_len => Ok(idx + 1),
            SlidePlacement::After(idx) => Err(Error::InvalidOperation(format!(
                "active slide {} does not exist (document has {} slides)",
                idx, existing_len
            ))),
        }
    }
}

/// Splice new slides into an existing sequence, keeping their order.
///
/// On error `existing` is left unchanged.
pub fn place_slides<T>(existing: &mut Vec<T>, added: Vec<T>, placement: SlidePlacement) -> Result<()> {
    let at = placement.insertion_index(existing.len())?;
    let tail = existing.split_off(at);
    existing.extend(added);
    existing.extend(tail);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records renderer calls in order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail_on: Option<String>,
    }

    impl SlideRenderer for Recorder {
        type Error = String;

        fn create_title_slide(&mut self, title: &str) -> std::result::Result<(), String> {
            self.calls.push(format!("title:{}", title));
            Ok(())
        }

        fn create_body_slide(&mut self, slide: &SlideRecord) -> std::result::Result<(), String> {
            if self.fail_on.as_deref() == Some(slide.title.as_str()) {
                return Err(format!("cannot render {}", slide.title));
            }
            let layout = SlideLayout::for_record(slide);
            self.calls.push(format!("{:?}:{}", layout, slide.title));
            Ok(())
        }
    }

    fn deck() -> SlideDeck {
        crate::parse_outline("# Deck\n## Part\n## A\n- a\n## B\n- b\n")
    }

    #[test]
    fn test_render_deck_order() {
        let mut recorder = Recorder::default();
        render_deck(&deck(), &mut recorder).unwrap();

        assert_eq!(
            recorder.calls,
            vec!["title:Deck", "SectionHeader:Part", "TitleAndBody:A", "TitleAndBody:B"]
        );
    }

    #[test]
    fn test_render_deck_stops_at_error() {
        let mut recorder = Recorder {
            fail_on: Some("A".to_string()),
            ..Default::default()
        };

        let err = render_deck(&deck(), &mut recorder).unwrap_err();

        assert_eq!(err, "cannot render A");
        assert_eq!(recorder.calls, vec!["title:Deck", "SectionHeader:Part"]);
    }

    #[test]
    fn test_code_layout_collapses_blank_lines() {
        let layout = CodeBlockLayout::from_code("fn main() {\n\n\n    run();\n}").unwrap();

        assert_eq!(layout.lines, vec!["fn main() {", "    run();", "}"]);
        assert_eq!(layout.font_size, 12);
        assert_eq!(layout.font_family(), "Courier");
    }

    #[test]
    fn test_code_layout_skips_single_line() {
        assert_eq!(CodeBlockLayout::from_code("x = 1"), None);
        assert_eq!(CodeBlockLayout::from_code("x = 1\n\n"), None);
    }

    #[test]
    fn test_code_layout_trailing_newline_from_response() {
        let deck = crate::parse_slides_response(
            r#"{"title":"T","slides":[{"title":"A","points":["x"],"code":"a\nb\n"}]}"#,
        )
        .unwrap();
        let code = deck.slides[0].code.as_deref().unwrap();
        assert_eq!(code, "a\nb\n");

        let layout = CodeBlockLayout::from_code(code).unwrap();
        assert_eq!(layout.lines, vec!["a", "b"]);
        assert_eq!(layout.font_size, 12);

        assert_eq!(CodeBlockLayout::from_code("a\n"), None);
    }

    #[test]
    fn test_code_layout_long_listing() {
        let code = (0..21).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let layout = CodeBlockLayout::from_code(&code).unwrap();

        assert_eq!(layout.lines.len(), 21);
        assert_eq!(layout.font_size, 8);
    }

    #[test]
    fn test_insertion_index() {
        assert_eq!(SlidePlacement::End.insertion_index(3).unwrap(), 3);
        assert_eq!(SlidePlacement::After(0).insertion_index(3).unwrap(), 1);
        assert_eq!(SlidePlacement::After(2).insertion_index(3).unwrap(), 3);
        assert!(matches!(
            SlidePlacement::After(3).insertion_index(3),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_place_slides_after_active() {
        let mut existing = vec!["a", "b", "c"];
        place_slides(&mut existing, vec!["x", "y"], SlidePlacement::After(0)).unwrap();

        assert_eq!(existing, vec!["a", "x", "y", "b", "c"]);
    }

    #[test]
    fn test_place_slides_error_leaves_document() {
        let mut existing = vec!["a"];
        let result = place_slides(&mut existing, vec!["x"], SlidePlacement::After(5));

        assert!(result.is_err());
        assert_eq!(existing, vec!["a"]);
    }
}
