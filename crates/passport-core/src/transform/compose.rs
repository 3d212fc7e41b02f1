//! Single-photo compositor.
//!
//! Renders a source photo into a fixed-size white canvas. The composed
//! transform, read from the canvas outward, is:
//!
//! ```text
//! translate(canvas_center + offset) · rotate(θ) · scale(s) · translate(-source_center)
//! ```
//!
//! so the offset is in canvas pixels and the rotation is about the image's own
//! center. Rendering uses inverse mapping: each destination pixel center is
//! mapped back into the source,
//!
//! ```text
//! d     = p - (canvas_center + offset)
//! local = R(-θ) · d / s
//! src   = local + source_center
//! ```
//!
//! and sampled there. Pixels only partially covered by the image are blended
//! toward white by their coverage, which keeps rotated edges smooth and makes
//! an untransformed, centered image land pixel-exactly.

use crate::decode::{DecodedImage, WHITE};
use crate::settings::PhotoTransform;
use crate::units::PixelSize;

use super::InterpolationFilter;

/// Size of the axis-aligned box enclosing a `width` x `height` rectangle
/// scaled by `scale` and rotated by `angle_degrees`.
///
/// # Example
///
/// ```
/// use passport_core::transform::transformed_extent;
///
/// // 90-degree rotation swaps dimensions
/// let (w, h) = transformed_extent(100.0, 50.0, 1.0, 90.0);
/// assert!((w - 50.0).abs() < 1e-9 && (h - 100.0).abs() < 1e-9);
/// ```
pub fn transformed_extent(width: f64, height: f64, scale: f64, angle_degrees: f64) -> (f64, f64) {
    let w = width * scale;
    let h = height * scale;
    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    (w * cos + h * sin, w * sin + h * cos)
}

/// Render `source` onto a white canvas of exactly `target` pixels.
///
/// With no source (or an empty one) the result is a blank white canvas. A
/// non-positive or non-finite scale draws nothing.
pub fn compose_photo(
    source: Option<&DecodedImage>,
    target: PixelSize,
    transform: &PhotoTransform,
    filter: InterpolationFilter,
) -> DecodedImage {
    let mut canvas = DecodedImage::white(target);

    let source = match source {
        Some(src) if !src.is_empty() && src.pixels.len() == src.size().rgb_len() => src,
        Some(src) if !src.is_empty() => {
            log::warn!(
                "source buffer holds {} bytes, expected {} for {}x{}; drawing blank photo",
                src.pixels.len(),
                src.size().rgb_len(),
                src.width,
                src.height
            );
            return canvas;
        }
        _ => {
            log::debug!(
                "composed blank {}x{} photo (no source)",
                target.width,
                target.height
            );
            return canvas;
        }
    };

    let scale = transform.scale;
    if target.is_empty() || !(scale.is_finite() && scale > 0.0) {
        return canvas;
    }

    let (src_w, src_h) = (source.width as f64, source.height as f64);
    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;

    let center_x = target.width as f64 / 2.0 + transform.offset_x;
    let center_y = target.height as f64 / 2.0 + transform.offset_y;

    let angle_rad = transform.rotation_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    // Only visit the pixels the transformed image can touch
    let (extent_w, extent_h) =
        transformed_extent(src_w, src_h, scale, transform.rotation_degrees);
    let x_start = clamp_index(center_x - extent_w / 2.0 - 1.0, target.width);
    let x_end = clamp_index(center_x + extent_w / 2.0 + 1.0, target.width);
    let y_start = clamp_index(center_y - extent_h / 2.0 - 1.0, target.height);
    let y_end = clamp_index(center_y + extent_h / 2.0 + 1.0, target.height);

    let row_stride = target.width as usize * 3;

    for dst_y in y_start..y_end {
        let dy = dst_y as f64 + 0.5 - center_y;
        for dst_x in x_start..x_end {
            let dx = dst_x as f64 + 0.5 - center_x;

            // Inverse rotation, then inverse scale
            let local_x = (dx * cos + dy * sin) / scale;
            let local_y = (dy * cos - dx * sin) / scale;

            let u = local_x + src_cx;
            let v = local_y + src_cy;

            let coverage = axis_coverage(u, src_w, scale) * axis_coverage(v, src_h, scale);
            if coverage <= 0.0 {
                continue;
            }

            let color = filter.sample(source, u - 0.5, v - 0.5);

            let idx = dst_y as usize * row_stride + dst_x as usize * 3;
            for c in 0..3 {
                let blended = color[c] * coverage + WHITE[c] as f64 * (1.0 - coverage);
                canvas.pixels[idx + c] = blended.clamp(0.0, 255.0).round() as u8;
            }
        }
    }

    log::debug!(
        "composed {}x{} photo from {}x{} source (scale {}, rotation {}, offset {},{})",
        target.width,
        target.height,
        source.width,
        source.height,
        scale,
        transform.rotation_degrees,
        transform.offset_x,
        transform.offset_y
    );

    canvas
}

/// Fraction of a destination pixel covered along one source axis.
///
/// `pos` is the source coordinate of the destination pixel center and
/// `len` the source extent. Distances are converted to destination pixels
/// by `scale`, so a pixel whose center sits exactly on an edge is half
/// covered. An image narrower than one destination pixel covers at most its
/// own scaled width.
#[inline]
fn axis_coverage(pos: f64, len: f64, scale: f64) -> f64 {
    let inside = pos.min(len - pos) * scale;
    (inside + 0.5).min(len * scale).clamp(0.0, 1.0)
}

/// Clamp a fractional canvas coordinate into `0..=limit`.
#[inline]
fn clamp_index(value: f64, limit: u32) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= limit as f64 {
        limit
    } else {
        value.floor() as u32
    }
}
