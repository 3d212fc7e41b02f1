//! Unit conversion, presets and input sanitizing for JavaScript.

use passport_core::{preset, settings, units};
use wasm_bindgen::prelude::*;

/// Convert millimeters to (fractional) pixels at `dpi`.
#[wasm_bindgen]
pub fn mm_to_px(mm: f64, dpi: u32) -> f64 {
    units::mm_to_px(mm, dpi)
}

/// Convert pixels to millimeters at `dpi`.
#[wasm_bindgen]
pub fn px_to_mm(px: f64, dpi: u32) -> f64 {
    units::px_to_mm(px, dpi)
}

/// Clamp a DPI typed by the user; empty or zero input keeps `last_known`.
#[wasm_bindgen]
pub fn sanitize_dpi(input: f64, last_known: u32) -> u32 {
    settings::sanitize_dpi(input, last_known)
}

/// Output size of a preset as `[width, height]` in pixels.
///
/// Unknown ids use the default 35x45 mm preset.
#[wasm_bindgen]
pub fn preset_pixel_size(preset_id: &str, dpi: u32) -> Vec<u32> {
    let size = preset::find_preset(preset_id).pixel_size(dpi);
    vec![size.width, size.height]
}

/// All presets as `{ id, label, widthMm, heightMm }` objects.
///
/// # Example (TypeScript)
///
/// ```typescript
/// for (const p of presets()) {
///   select.add(new Option(p.label, p.id));
/// }
/// ```
#[wasm_bindgen]
pub fn presets() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&preset::PRESETS).map_err(|e| JsValue::from_str(&e.to_string()))
}
