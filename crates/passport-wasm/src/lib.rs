//! Passport WASM - WebAssembly bindings for the passport photo maker
//!
//! This crate exposes the passport-core functionality to the browser page.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `units` - mm/px conversion, presets, DPI sanitizing
//! - `decode` - Decoding uploaded images
//! - `compose` - Single-photo compositor
//! - `sheet` - A4 layout and rendering
//! - `encode` - PNG export and download names
//! - `editor` - Stateful `PhotoEditor` and `SheetComposer` sessions
//!
//! # Usage
//!
//! ```typescript
//! import init, { PhotoEditor } from '@passport/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new PhotoEditor();
//! editor.load_image(new Uint8Array(await file.arrayBuffer()));
//! const photo = editor.render(false);
//! console.log(`Rendered ${photo.width}x${photo.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod compose;
mod decode;
mod editor;
mod encode;
mod logger;
mod sheet;
mod types;
mod units;

// Re-export public types
pub use compose::{blank_photo, compose_photo};
pub use decode::{decode_image, resize};
pub use editor::{JsExportFile, PhotoEditor, SheetComposer};
pub use encode::{encode_png, encode_png_from_image, photo_file_name, sheet_file_name};
pub use sheet::{compute_sheet_layout, render_sheet, JsSheetLayout, JsSheetRender};
pub use types::JsDecodedImage;
pub use units::{mm_to_px, preset_pixel_size, presets, px_to_mm, sanitize_dpi};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// Raise or lower console logging; `debug` also reports layout and render sizes.
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    log::set_max_level(parse_level(level));
}

fn parse_level(level: &str) -> log::LevelFilter {
    level.parse().unwrap_or(log::LevelFilter::Info)
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), log::LevelFilter::Debug);
        assert_eq!(parse_level("TRACE"), log::LevelFilter::Trace);
        assert_eq!(parse_level("off"), log::LevelFilter::Off);
        assert_eq!(parse_level("loud"), log::LevelFilter::Info);
    }
}
