//! PPTX (Office Open XML) rendering backend for generated slide decks.
//!
//! Writes .pptx packages: ZIP archives holding PresentationML parts.

pub mod parts;
pub mod writer;

pub use writer::{write_deck, PptxWriter};
