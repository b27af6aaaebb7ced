//! Outline text output.
//!
//! Writes a deck back out in the same line grammar the parser reads: the
//! deck title as `#`, each slide as `##` plus bullets and a fenced code
//! block, and untitled slides as `---`.

use crate::classify::{CODE_FENCE, SEPARATOR};
use crate::types::{SlideDeck, SlideRecord};

/// Format a deck with the default formatter.
pub fn to_markdown(deck: &SlideDeck) -> String {
    MarkdownFormatter::new().format(deck)
}

/// Formatter for outline text output.
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    /// Whether to put a blank line between slides.
    blank_line_between_slides: bool,
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self {
            blank_line_between_slides: true,
        }
    }
}

impl MarkdownFormatter {
    /// Create a formatter that separates slides with blank lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether slides are separated by blank lines.
    pub fn with_blank_line_between_slides(mut self, blank: bool) -> Self {
        self.blank_line_between_slides = blank;
        self
    }

    /// Format a deck as outline text, ending with a newline.
    ///
    /// # Example output
    /// ```text
    /// # Deck
    ///
    /// ## Intro
    /// - a
    /// - b
    /// ```
    pub fn format(&self, deck: &SlideDeck) -> String {
        let mut blocks = vec![format!("# {}", deck.title)];
        blocks.extend(deck.slides.iter().map(format_slide));

        let separator = if self.blank_line_between_slides {
            "\n\n"
        } else {
            "\n"
        };
        format!("{}\n", blocks.join(separator))
    }
}

fn format_slide(slide: &SlideRecord) -> String {
    let mut lines = Vec::with_capacity(slide.points.len() + 4);

    if slide.title.is_empty() {
        lines.push(SEPARATOR.to_string());
    } else {
        lines.push(format!("## {}", slide.title));
    }

    lines.extend(slide.points.iter().map(|point| format!("- {}", point)));

    if let Some(code) = &slide.code {
        lines.push(CODE_FENCE.to_string());
        lines.push(code.clone());
        lines.push(CODE_FENCE.to_string());
    }

    lines.join("\n")
}
