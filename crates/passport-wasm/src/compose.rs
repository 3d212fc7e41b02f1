//! Single-photo compositor bindings.

use crate::types::{interpolation, JsDecodedImage};
use passport_core::transform::compose_photo as core_compose;
use passport_core::{PhotoTransform, PixelSize};
use wasm_bindgen::prelude::*;

/// Parse a `{ scale, rotationDegrees, offsetX, offsetY }` object.
///
/// Missing fields take their defaults, `undefined`/`null` is the identity
/// transform, and out-of-range values are clamped.
pub(crate) fn transform_from_js(value: JsValue) -> Result<PhotoTransform, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(PhotoTransform::default());
    }
    let transform: PhotoTransform =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(transform.sanitized())
}

/// Render `image` onto a white canvas of `width` x `height` pixels.
///
/// # Arguments
///
/// * `image` - The uploaded photo
/// * `width`, `height` - Output canvas size in pixels
/// * `transform` - `{ scale, rotationDegrees, offsetX, offsetY }`
/// * `use_lanczos` - Use high-quality Lanczos3 sampling, otherwise bilinear
///
/// # Example (TypeScript)
///
/// ```typescript
/// const [w, h] = preset_pixel_size('35x45mm', 300);
/// const photo = compose_photo(image, w, h, { scale: 1.2, rotationDegrees: -3 }, false);
/// ctx.putImageData(new ImageData(new Uint8ClampedArray(photo.rgba()), w, h), 0, 0);
/// ```
#[wasm_bindgen]
pub fn compose_photo(
    image: &JsDecodedImage,
    width: u32,
    height: u32,
    transform: JsValue,
    use_lanczos: bool,
) -> Result<JsDecodedImage, JsValue> {
    let transform = transform_from_js(transform)?;
    Ok(compose(Some(image), PixelSize::new(width, height), &transform, use_lanczos))
}

/// A blank white canvas of `width` x `height`, shown before any upload.
#[wasm_bindgen]
pub fn blank_photo(width: u32, height: u32) -> JsDecodedImage {
    compose(None, PixelSize::new(width, height), &PhotoTransform::default(), false)
}

fn compose(
    image: Option<&JsDecodedImage>,
    size: PixelSize,
    transform: &PhotoTransform,
    use_lanczos: bool,
) -> JsDecodedImage {
    let source = image.map(JsDecodedImage::to_decoded);
    let result = core_compose(source.as_ref(), size, transform, interpolation(use_lanczos));
    JsDecodedImage::from_decoded(result)
}
