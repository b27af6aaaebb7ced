//! Core slide deck model, outline-to-slides parsing, and the renderer
//! interface used by the output backends.

pub mod classify;
pub mod error;
pub mod markdown;
pub mod outline;
pub mod render;
pub mod response;
pub mod types;

pub use classify::{classify_line, LineKind};
pub use error::{Error, Result};
pub use markdown::{to_markdown, MarkdownFormatter};
pub use outline::{parse_outline, OutlineParser};
pub use render::{
    place_slides, render_deck, CodeBlockLayout, SlideLayout, SlidePlacement, SlideRenderer,
};
pub use response::{parse_slides_response, strip_json_fences};
pub use types::{SlideDeck, SlideRecord, DEFAULT_DECK_TITLE, UNTITLED_SLIDE_TITLE};
