//! WASM-compatible wrapper for outline-to-slides conversion.
//!
//! This crate exposes the outline parser and the model-response decoder to
//! JavaScript for use in Cloudflare Workers and browser add-ons.

use serde::{Deserialize, Serialize};
use slides_core::{OutlineParser, SlideDeck, SlidePlacement};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of converting an outline or a model response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The finished deck.
    pub deck: SlideDeck,
    /// Number of body slides (the title slide is not counted).
    pub slide_count: usize,
    /// Number of body slides rendered title-only.
    pub section_header_count: usize,
}

impl From<SlideDeck> for ConversionResult {
    fn from(deck: SlideDeck) -> Self {
        let section_header_count = deck.slides.iter().filter(|s| s.is_section_header()).count();
        Self {
            slide_count: deck.len(),
            section_header_count,
            deck,
        }
    }
}

/// Convert outline text into a slide deck.
///
/// # Arguments
/// * `text` - Outline text (headings, bullets, code fences, `---` breaks)
/// * `default_title` - Deck title used when the outline has no `# ` heading
/// * `untitled_title` - Title for slides that have content but no heading
///
/// # Returns
/// A JavaScript object with the conversion result.
#[wasm_bindgen]
pub fn convert_outline(
    text: &str,
    default_title: Option<String>,
    untitled_title: Option<String>,
) -> Result<JsValue, JsValue> {
    let result = convert_outline_impl(text, default_title, untitled_title);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn convert_outline_impl(
    text: &str,
    default_title: Option<String>,
    untitled_title: Option<String>,
) -> ConversionResult {
    let mut parser = OutlineParser::new();
    if let Some(title) = default_title.filter(|t| !t.is_empty()) {
        parser = parser.with_default_title(title);
    }
    if let Some(title) = untitled_title.filter(|t| !t.is_empty()) {
        parser = parser.with_untitled_slide_title(title);
    }

    parser.parse(text).into()
}

/// Decode the JSON outline returned by a language model.
///
/// Throws when the content is not a slide deck.
#[wasm_bindgen]
pub fn decode_slides_response(content: &str) -> Result<JsValue, JsValue> {
    let result = decode_slides_response_impl(content).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn decode_slides_response_impl(content: &str) -> Result<ConversionResult, String> {
    slides_core::parse_slides_response(content)
        .map(ConversionResult::from)
        .map_err(|e| e.to_string())
}

/// Re-serialize a deck (as returned by `convert_outline`) to outline text.
#[wasm_bindgen]
pub fn deck_to_markdown(deck: JsValue) -> Result<String, JsValue> {
    let deck: SlideDeck = serde_wasm_bindgen::from_value(deck)
        .map_err(|e| JsValue::from_str(&format!("Invalid deck: {}", e)))?;

    Ok(slides_core::to_markdown(&deck))
}

/// Convert outline text straight to PPTX bytes.
#[wasm_bindgen]
pub fn outline_to_pptx(text: &str) -> Result<js_sys::Uint8Array, JsValue> {
    let bytes = outline_to_pptx_impl(text).map_err(|e| JsValue::from_str(&e))?;
    Ok(js_sys::Uint8Array::from(bytes.as_slice()))
}

fn outline_to_pptx_impl(text: &str) -> Result<Vec<u8>, String> {
    let deck = OutlineParser::new().parse(text);
    slides_pptx::write_deck(&deck).map_err(|e| format!("PPTX error: {}", e))
}

/// Index a host should move newly added slides to so that they follow the
/// slide that was active before conversion.
///
/// Without an active slide the new slides stay at the end. Throws when
/// `active_index` is not a slide of the document.
#[wasm_bindgen]
pub fn place_after(existing_len: usize, active_index: Option<usize>) -> Result<usize, JsValue> {
    place_after_impl(existing_len, active_index).map_err(|e| JsValue::from_str(&e))
}

fn place_after_impl(existing_len: usize, active_index: Option<usize>) -> Result<usize, String> {
    let placement = active_index.map_or(SlidePlacement::End, SlidePlacement::After);
    placement
        .insertion_index(existing_len)
        .map_err(|e| e.to_string())
}
