//! Outline text to slide deck conversion.
//!
//! The parser walks the input line by line through a two-state machine
//! ([`Mode`]). Headings, separators and code fences are structural events
//! that act on the deck immediately; bullets and plain text collect into a
//! content group that is flushed at the next structural event or at the end
//! of input.
//!
//! A flushed group is *hierarchical* when any bullet in it is indented. Each
//! indent-0 bullet then heads a new slide and everything after it becomes that
//! slide's points. A flat group is appended to the slide that is already open.

use crate::classify::{classify_line, LineKind, CODE_FENCE};
use crate::types::{ContentItem, SlideDeck, SlideRecord, DEFAULT_DECK_TITLE, UNTITLED_SLIDE_TITLE};
use log::{debug, trace, warn};

/// Parse outline text with the default configuration.
pub fn parse_outline(text: &str) -> SlideDeck {
    OutlineParser::new().parse(text)
}

/// Converts loosely structured outline text into a [`SlideDeck`].
#[derive(Debug, Clone)]
pub struct OutlineParser {
    /// Deck title used when the outline has no level-1 heading.
    default_title: String,

    /// Title for slides created for content that has no heading.
    untitled_slide_title: String,
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_DECK_TITLE.to_string(),
            untitled_slide_title: UNTITLED_SLIDE_TITLE.to_string(),
        }
    }
}

impl OutlineParser {
    /// Create a parser with the default placeholder titles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck title used when the outline never names one.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the title given to slides that are opened without a heading.
    pub fn with_untitled_slide_title(mut self, title: impl Into<String>) -> Self {
        self.untitled_slide_title = title.into();
        self
    }

    /// Parse outline text into a finished deck.
    ///
    /// Never fails: every line falls into some category, and malformed
    /// structure turns into extra or merged slides.
    pub fn parse(&self, text: &str) -> SlideDeck {
        let mut assembler = DeckAssembler::new(&self.untitled_slide_title);
        let mut mode = Mode::Normal;

        for (idx, line) in text.lines().enumerate() {
            mode = match mode {
                Mode::InCodeBlock(mut code) => {
                    if line.trim().starts_with(CODE_FENCE) {
                        trace!("line {}: closing code fence", idx + 1);
                        assembler.attach_code(&code);
                        Mode::Normal
                    } else {
                        code.push_str(line);
                        code.push('\n');
                        Mode::InCodeBlock(code)
                    }
                }
                Mode::Normal => {
                    let kind = classify_line(line);
                    trace!("line {}: {:?}", idx + 1, kind);
                    assembler.handle(kind)
                }
            };
        }

        if let Mode::InCodeBlock(code) = mode {
            if !code.trim().is_empty() {
                warn!(
                    "Unterminated code fence at end of input, dropping {} buffered line(s)",
                    code.lines().count()
                );
            }
        }

        let deck = assembler.finish(&self.default_title);
        debug!("Parsed outline into {} slide(s)", deck.len());
        deck
    }
}

/// Line-handling state.
#[derive(Debug)]
enum Mode {
    Normal,
    /// Inside a fenced block; holds the raw lines captured so far.
    InCodeBlock(String),
}

/// The one slide that a closing code fence attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveSlide {
    None,
    /// The level-1 slide that has not been committed yet.
    Pending,
    /// A slide already in the deck, by index.
    Committed(usize),
}

/// Bullets and plain text collected since the last flush.
#[derive(Debug, Default)]
struct ContentGroup {
    items: Vec<ContentItem>,
}

impl ContentGroup {
    fn push(&mut self, item: ContentItem) {
        self.items.push(item);
    }

    fn is_hierarchical(&self) -> bool {
        self.items.iter().any(ContentItem::is_nested)
    }

    fn take(&mut self) -> Vec<ContentItem> {
        std::mem::take(&mut self.items)
    }
}

/// Owns the slides, the deck title and the slide currently being built.
struct DeckAssembler<'a> {
    title: Option<String>,
    slides: Vec<SlideRecord>,
    /// Slide opened by a level-1 heading and not yet committed.
    pending: Option<SlideRecord>,
    active: ActiveSlide,
    group: ContentGroup,
    untitled_slide_title: &'a str,
}

impl<'a> DeckAssembler<'a> {
    fn new(untitled_slide_title: &'a str) -> Self {
        Self {
            title: None,
            slides: Vec::new(),
            pending: None,
            active: ActiveSlide::None,
            group: ContentGroup::default(),
            untitled_slide_title,
        }
    }

    /// Apply one classified line in normal mode and return the next mode.
    fn handle(&mut self, kind: LineKind) -> Mode {
        if kind.is_structural() {
            self.flush_group();
        }

        match kind {
            LineKind::Blank => {}
            LineKind::CodeFence => return Mode::InCodeBlock(String::new()),
            LineKind::Heading1(text) => self.open_heading(text),
            LineKind::Heading2or3(text) => {
                self.commit_pending();
                self.commit(SlideRecord::new(text));
            }
            LineKind::Separator => {
                self.commit_pending();
                self.commit(SlideRecord::placeholder());
            }
            LineKind::Bullet { indent, content } => {
                self.group.push(ContentItem::bullet(indent, content));
            }
            LineKind::PlainText(text) => self.group.push(ContentItem::plain(text)),
        }
        Mode::Normal
    }

    /// First level-1 heading names the deck; later ones open a pending slide.
    fn open_heading(&mut self, text: String) {
        if self.title.is_none() {
            debug!("Deck title: {:?}", text);
            self.title = Some(text);
            return;
        }
        self.commit_pending();
        self.pending = Some(SlideRecord::new(text));
        self.active = ActiveSlide::Pending;
    }

    /// Push a slide into the deck and make it the active one.
    fn commit(&mut self, slide: SlideRecord) {
        debug!("Slide {}: {:?}", self.slides.len() + 1, slide.title);
        self.slides.push(slide);
        self.active = ActiveSlide::Committed(self.slides.len() - 1);
    }

    fn commit_pending(&mut self) {
        if let Some(slide) = self.pending.take() {
            let previous = self.active;
            self.commit(slide);
            // Only moves the active slot if the pending slide held it.
            if previous != ActiveSlide::Pending {
                self.active = previous;
            }
        }
    }

    fn active_slide_mut(&mut self) -> Option<&mut SlideRecord> {
        match self.active {
            ActiveSlide::None => None,
            ActiveSlide::Pending => self.pending.as_mut(),
            ActiveSlide::Committed(idx) => self.slides.get_mut(idx),
        }
    }

    /// Attach the text of a closed code block to the active slide.
    fn attach_code(&mut self, buffer: &str) {
        let code = buffer.trim();
        if code.is_empty() {
            return;
        }
        match self.active_slide_mut() {
            Some(slide) => {
                if slide.code.is_some() {
                    debug!("Replacing code block on slide {:?}", slide.title);
                }
                slide.code = Some(code.to_string());
            }
            None => debug!("Code block closed with no active slide, discarding"),
        }
    }

    fn flush_group(&mut self) {
        if self.group.items.is_empty() {
            return;
        }
        let hierarchical = self.group.is_hierarchical();
        let items = self.group.take();
        trace!(
            "Flushing {} item(s) as {} group",
            items.len(),
            if hierarchical { "hierarchical" } else { "flat" }
        );

        if hierarchical {
            self.flush_hierarchical(items);
        } else {
            self.flush_flat(items);
        }
    }

    /// Every indent-0 bullet heads a slide of its own.
    fn flush_hierarchical(&mut self, items: Vec<ContentItem>) {
        let untitled = self.untitled_slide_title;
        let mut working: Option<SlideRecord> = None;

        for item in items {
            if item.is_head() {
                if let Some(slide) = working.take() {
                    self.commit(slide);
                }
                working = Some(SlideRecord::new(item.content));
            } else {
                working
                    .get_or_insert_with(|| SlideRecord::new(untitled))
                    .push_point(item.content);
            }
        }

        if let Some(slide) = working {
            self.commit(slide);
        }
    }

    /// Append to the last committed slide, else the pending one, else a new one.
    fn flush_flat(&mut self, items: Vec<ContentItem>) {
        let points = items.into_iter().map(|item| item.content);

        if let Some(last) = self.slides.last_mut() {
            last.points.extend(points);
        } else if let Some(pending) = self.pending.as_mut() {
            pending.points.extend(points);
        } else {
            let mut slide = SlideRecord::new(self.untitled_slide_title);
            slide.points.extend(points);
            self.commit(slide);
        }
    }

    fn finish(mut self, default_title: &str) -> SlideDeck {
        self.flush_group();
        self.commit_pending();

        let mut deck = SlideDeck {
            title: self.title.unwrap_or_else(|| default_title.to_string()),
            slides: self.slides,
        };
        deck.mark_section_headers();
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(deck: &SlideDeck) -> Vec<&str> {
        deck.slides.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_heading_with_flat_bullets() {
        let deck = parse_outline("# Deck\n## Intro\n- a\n- b\n");

        assert_eq!(deck.title, "Deck");
        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].title, "Intro");
        assert_eq!(deck.slides[0].points, vec!["a", "b"]);
        assert_eq!(deck.slides[0].code, None);
        assert!(!deck.slides[0].section_header);
    }

    #[test]
    fn test_nested_bullets_become_slide() {
        let deck = parse_outline("# Deck\n- x\n  - y\n  - z\n");

        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].title, "x");
        assert_eq!(deck.slides[0].points, vec!["y", "z"]);
    }

    #[test]
    fn test_separator_inserts_empty_slide() {
        let deck = parse_outline("# Deck\n## A\n- a\n\n---\n\n## B\n- b\n");

        assert_eq!(titles(&deck), vec!["A", "", "B"]);
        assert!(deck.slides[1].points.is_empty());
        assert!(deck.slides[1].section_header);
        assert_eq!(deck.slides[2].points, vec!["b"]);
    }

    #[test]
    fn test_code_after_subheading_keeps_section_header() {
        let deck = parse_outline("# Deck\n## Example\n```rust\nfn main() {}\n```\n");

        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].code.as_deref(), Some("fn main() {}"));
        assert!(deck.slides[0].points.is_empty());
        assert!(deck.slides[0].section_header);
    }

    #[test]
    fn test_missing_title_uses_default() {
        let deck = parse_outline("## Only\n- a\n");
        assert_eq!(deck.title, DEFAULT_DECK_TITLE);

        let deck = OutlineParser::new().with_default_title("Untitled").parse("");
        assert_eq!(deck.title, "Untitled");
        assert!(deck.is_empty());
    }

    #[test]
    fn test_later_level1_headings_open_slides() {
        let deck = parse_outline("# Deck\n# One\n- a\n- b\n# Two\n");

        assert_eq!(titles(&deck), vec!["One", "Two"]);
        assert_eq!(deck.slides[0].points, vec!["a", "b"]);
        assert!(deck.slides[1].section_header);
    }

    #[test]
    fn test_flat_group_prefers_last_committed_slide() {
        // "b" follows "# Two", but "One" is already committed and wins.
        let deck = parse_outline("# Deck\n# One\n# Two\n- b\n");

        assert_eq!(titles(&deck), vec!["One", "Two"]);
        assert_eq!(deck.slides[0].points, vec!["b"]);
        assert!(deck.slides[1].points.is_empty());
    }

    #[test]
    fn test_flat_group_without_slide_opens_untitled() {
        let deck = parse_outline("- a\n- b\n## Next\n");

        assert_eq!(titles(&deck), vec![UNTITLED_SLIDE_TITLE, "Next"]);
        assert_eq!(deck.slides[0].points, vec!["a", "b"]);
    }

    #[test]
    fn test_untitled_slide_title_is_configurable() {
        let deck = OutlineParser::new()
            .with_untitled_slide_title("Notes")
            .parse("  - orphan\n- head\n  - child\n");

        assert_eq!(titles(&deck), vec!["Notes", "head"]);
        assert_eq!(deck.slides[0].points, vec!["orphan"]);
        assert_eq!(deck.slides[1].points, vec!["child"]);
    }

    #[test]
    fn test_hierarchical_slide_count() {
        let input = "# Deck\n  - early\nintro text\n- one\n  - 1a\n- two\n- three\n    - 3a\n";
        let deck = parse_outline(input);

        // Three heads plus one placeholder for the leading items.
        assert_eq!(titles(&deck), vec![UNTITLED_SLIDE_TITLE, "one", "two", "three"]);
        assert_eq!(deck.slides[0].points, vec!["early", "intro text"]);
        assert_eq!(deck.slides[1].points, vec!["1a"]);
        assert!(deck.slides[2].section_header);
        assert_eq!(deck.slides[3].points, vec!["3a"]);
    }

    #[test]
    fn test_plain_text_joins_flat_group() {
        let deck = parse_outline("# Deck\n## Topic\nSome prose.\n- bullet\nMore prose.\n");

        assert_eq!(deck.slides[0].points, vec!["Some prose.", "bullet", "More prose."]);
    }

    #[test]
    fn test_fenced_lines_are_not_classified() {
        let input = "# Deck\n## Code\n```\n# not a heading\n- not a bullet\n\n---\n```\n";
        let deck = parse_outline(input);

        assert_eq!(deck.slides.len(), 1);
        assert_eq!(
            deck.slides[0].code.as_deref(),
            Some("# not a heading\n- not a bullet\n\n---")
        );
        assert!(deck.slides[0].points.is_empty());
    }

    #[test]
    fn test_code_keeps_inner_indentation() {
        let deck = parse_outline("## S\n```\n  if x {\n      y();\n  }\n```\n");

        assert_eq!(deck.slides[0].code.as_deref(), Some("if x {\n      y();\n  }"));
    }

    #[test]
    fn test_unterminated_fence_is_dropped() {
        let deck = parse_outline("# Deck\n## S\n- a\n```\nlet x = 1;\n");

        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].code, None);
        assert_eq!(deck.slides[0].points, vec!["a"]);
    }

    #[test]
    fn test_code_attaches_to_pending_slide() {
        let deck = parse_outline("# Deck\n# Pending\n```\nx\n```\n- p\n");

        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].title, "Pending");
        assert_eq!(deck.slides[0].code.as_deref(), Some("x"));
        assert_eq!(deck.slides[0].points, vec!["p"]);
    }

    #[test]
    fn test_code_attaches_to_last_hierarchical_slide() {
        let deck = parse_outline("# Deck\n- a\n  - a1\n- b\n  - b1\n```\ncode\n```\n");

        assert_eq!(titles(&deck), vec!["a", "b"]);
        assert_eq!(deck.slides[0].code, None);
        assert_eq!(deck.slides[1].code.as_deref(), Some("code"));
    }

    #[test]
    fn test_code_after_separator_attaches_to_break() {
        let deck = parse_outline("## A\n---\n```\nx\n```\n");

        assert_eq!(deck.slides[0].code, None);
        assert_eq!(deck.slides[1].code.as_deref(), Some("x"));
    }

    #[test]
    fn test_code_without_active_slide_is_discarded() {
        let deck = parse_outline("# Deck\n```\norphan\n```\n## A\n");

        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].code, None);
    }

    #[test]
    fn test_empty_code_block_attaches_nothing() {
        let deck = parse_outline("## A\n```\n\n   \n```\n");

        assert_eq!(deck.slides[0].code, None);
    }

    #[test]
    fn test_second_code_block_replaces_first() {
        let deck = parse_outline("## A\n```\none\n```\n```\ntwo\n```\n");

        assert_eq!(deck.slides[0].code.as_deref(), Some("two"));
    }

    #[test]
    fn test_separator_commits_pending_slide() {
        let deck = parse_outline("# Deck\n# Pending\n---\n## After\n");

        assert_eq!(titles(&deck), vec!["Pending", "", "After"]);
    }

    #[test]
    fn test_pending_slide_committed_once() {
        let deck = parse_outline("# Deck\n# Last\n- a\n");

        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].points, vec!["a"]);
    }

    #[test]
    fn test_blank_lines_do_not_flush() {
        let deck = parse_outline("# Deck\n- x\n\n  - y\n\n- z\n");

        // One group: x heads a slide, z heads another.
        assert_eq!(titles(&deck), vec!["x", "z"]);
        assert_eq!(deck.slides[0].points, vec!["y"]);
    }

    #[test]
    fn test_crlf_input() {
        let deck = parse_outline("# Deck\r\n## Intro\r\n- a\r\n```\r\nx\r\n```\r\n");

        assert_eq!(deck.title, "Deck");
        assert_eq!(deck.slides[0].points, vec!["a"]);
        assert_eq!(deck.slides[0].code.as_deref(), Some("x"));
    }

    #[test]
    fn test_section_header_matches_points() {
        let input = "# D\n## A\n### B\n- b\n---\n- c\n  - d\n# E\n```\nz\n```\n";
        let deck = parse_outline(input);

        assert!(!deck.is_empty());
        for slide in &deck.slides {
            assert_eq!(slide.section_header, slide.points.is_empty(), "{:?}", slide);
        }
    }

    #[test]
    fn test_content_before_title_heading() {
        let deck = parse_outline("- early\n# Deck\n## A\n");

        assert_eq!(deck.title, "Deck");
        assert_eq!(titles(&deck), vec![UNTITLED_SLIDE_TITLE, "A"]);
        assert_eq!(deck.slides[0].points, vec!["early"]);
    }
}
