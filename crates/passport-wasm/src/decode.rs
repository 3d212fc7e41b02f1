//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@passport/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::{filter_from_u8, JsDecodedImage};
use passport_core::decode;
use passport_core::units::PixelSize;
use wasm_bindgen::prelude::*;

/// Decode an uploaded image (JPEG, PNG, GIF, BMP or WebP).
///
/// EXIF orientation is applied and transparency is flattened onto white.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the data is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
///
/// # Errors
///
/// Returns an error if either target dimension is zero.
#[wasm_bindgen]
pub fn resize(
    image: &JsDecodedImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    decode::resize(
        &image.to_decoded(),
        PixelSize::new(width, height),
        filter_from_u8(filter),
    )
    .map(JsDecodedImage::from_decoded)
    .map_err(|e| JsValue::from_str(&e.to_string()))
}
