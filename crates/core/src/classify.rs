//! Line classification for outline text.
//!
//! Each non-code line of an outline maps to exactly one [`LineKind`]. Rules
//! are tried in priority order and the first match wins, so a line such as
//! `---` is a separator rather than a bullet.

use regex::Regex;
use std::sync::LazyLock;

/// Marker that opens and closes a fenced code block.
pub const CODE_FENCE: &str = "```";

/// A whole line that forces a slide break.
pub const SEPARATOR: &str = "---";

/// `(leading whitespace)(- or *)(whitespace)(rest)`.
static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*]\s+(.*)").unwrap());

/// Level-2 and level-3 heading markers with their trailing whitespace.
static SUBHEADING_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{2,3}\s*").unwrap());

/// The category of one line of outline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// A line starting with the code fence marker.
    CodeFence,
    /// `# text`, payload is the heading text.
    Heading1(String),
    /// `## text` or `### text`, payload is the heading text.
    Heading2or3(String),
    /// `---` on its own.
    Separator,
    /// `- text` or `* text`, indent is the leading whitespace width in characters.
    Bullet { indent: usize, content: String },
    /// Any other non-blank line, trimmed.
    PlainText(String),
}

impl LineKind {
    /// Whether this line ends the current content group.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            LineKind::CodeFence
                | LineKind::Heading1(_)
                | LineKind::Heading2or3(_)
                | LineKind::Separator
        )
    }
}

/// Classify a single line of outline text.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if trimmed.starts_with(CODE_FENCE) {
        return LineKind::CodeFence;
    }

    if trimmed.starts_with("# ") {
        let text = trimmed.replacen("# ", "", 1);
        return LineKind::Heading1(text.trim().to_string());
    }

    if trimmed.starts_with("## ") || trimmed.starts_with("### ") {
        let text = SUBHEADING_MARKER_REGEX.replace(trimmed, "");
        return LineKind::Heading2or3(text.trim().to_string());
    }

    if trimmed == SEPARATOR {
        return LineKind::Separator;
    }

    if let Some(caps) = BULLET_REGEX.captures(line) {
        let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
        let content = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
        return LineKind::Bullet { indent, content };
    }

    LineKind::PlainText(trimmed.to_string())
}
