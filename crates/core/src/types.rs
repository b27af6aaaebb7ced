//! Domain types for representing a generated slide deck.

use serde::{Deserialize, Serialize};

/// Deck title used when the source never names one.
pub const DEFAULT_DECK_TITLE: &str = "Title";

/// Slide title used for content that has no heading of its own.
pub const UNTITLED_SLIDE_TITLE: &str = "Content";

/// A complete deck: one title plus its body slides in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDeck {
    /// Presentation title, rendered on its own title slide.
    #[serde(default = "default_deck_title")]
    pub title: String,

    /// Body slides in the order their structure appeared in the source.
    #[serde(default)]
    pub slides: Vec<SlideRecord>,
}

fn default_deck_title() -> String {
    DEFAULT_DECK_TITLE.to_string()
}

impl SlideDeck {
    /// Create an empty deck with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
        }
    }

    /// Number of body slides (the title slide is not counted).
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no body slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Recompute `section_header` on every slide from its points.
    pub fn mark_section_headers(&mut self) {
        for slide in &mut self.slides {
            slide.section_header = slide.points.is_empty();
        }
    }
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::new(DEFAULT_DECK_TITLE)
    }
}

/// A single body slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    /// Slide title. Empty for explicit break placeholders.
    #[serde(default)]
    pub title: String,

    /// Bullet points, in source order.
    #[serde(default)]
    pub points: Vec<String>,

    /// Text of the fenced code block attached to this slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// True iff `points` is empty once the deck is finished.
    #[serde(default)]
    pub section_header: bool,
}

impl SlideRecord {
    /// Create a slide with a title and no points.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Create an untitled slide used as an explicit break marker.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Append a bullet point.
    pub fn push_point(&mut self, point: impl Into<String>) {
        self.points.push(point.into());
    }

    /// Whether a renderer should use a title-only layout for this slide.
    pub fn is_section_header(&self) -> bool {
        self.section_header
    }
}

/// One bullet or plain-text line waiting in a content group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContentItem {
    pub indent: usize,
    pub content: String,
    pub is_plain_text: bool,
}

impl ContentItem {
    pub fn bullet(indent: usize, content: impl Into<String>) -> Self {
        Self {
            indent,
            content: content.into(),
            is_plain_text: false,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            indent: 0,
            content: content.into(),
            is_plain_text: true,
        }
    }

    /// An indent-0 bullet, which heads a slide in a hierarchical group.
    pub fn is_head(&self) -> bool {
        !self.is_plain_text && self.indent == 0
    }

    /// A bullet nested under another one.
    pub fn is_nested(&self) -> bool {
        !self.is_plain_text && self.indent > 0
    }
}
