//! PNG export WASM bindings.

use crate::types::JsDecodedImage;
use passport_core::{encode, export};
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if a dimension is zero or the pixel data length does not
/// match `width * height * 3`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const png = encode_png(image.pixels(), image.width, image.height);
/// const blob = new Blob([png], { type: 'image/png' });
/// ```
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a `JsDecodedImage` to PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsDecodedImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_image(&image.to_decoded()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Download name for a single photo, e.g. `35x45mm_300dpi.png`.
#[wasm_bindgen]
pub fn photo_file_name(preset_id: &str, dpi: u32) -> String {
    export::photo_file_name(preset_id, dpi)
}

/// Download name for an A4 sheet, e.g. `A4_300dpi.png`.
#[wasm_bindgen]
pub fn sheet_file_name(dpi: u32) -> String {
    export::sheet_file_name(dpi)
}
