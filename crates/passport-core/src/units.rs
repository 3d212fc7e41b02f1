//! Physical print units and their pixel equivalents.
//!
//! Print sizes are specified in millimeters and converted to pixels at a
//! given resolution in dots per inch (DPI). Pixel sizes are always obtained
//! by rounding each axis independently.

use serde::{Deserialize, Serialize};

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// ISO A4 sheet, portrait.
pub const A4: PhysicalSize = PhysicalSize {
    width_mm: 210.0,
    height_mm: 297.0,
};

/// Convert millimeters to (fractional) pixels at the given DPI.
///
/// ```text
/// px = mm / 25.4 * dpi
/// ```
///
/// # Example
///
/// ```
/// use passport_core::units::mm_to_px;
///
/// assert_eq!(mm_to_px(25.4, 96), 96.0);
/// ```
#[inline]
pub fn mm_to_px(mm: f64, dpi: u32) -> f64 {
    mm / MM_PER_INCH * dpi as f64
}

/// Convert pixels back to millimeters at the given DPI.
#[inline]
pub fn px_to_mm(px: f64, dpi: u32) -> f64 {
    if dpi == 0 {
        return 0.0;
    }
    px / dpi as f64 * MM_PER_INCH
}

/// Convert millimeters to a whole number of pixels, rounding to nearest.
///
/// Negative or non-finite results saturate to zero.
#[inline]
pub fn mm_to_px_rounded(mm: f64, dpi: u32) -> u32 {
    let px = mm_to_px(mm, dpi).round();
    if px.is_finite() && px > 0.0 {
        px as u32
    } else {
        0
    }
}

/// A physical print size in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalSize {
    /// Width in millimeters.
    pub width_mm: f64,
    /// Height in millimeters.
    pub height_mm: f64,
}

impl PhysicalSize {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Pixel dimensions of this size at the given DPI.
    pub fn to_pixels(self, dpi: u32) -> PixelSize {
        PixelSize::new(
            mm_to_px_rounded(self.width_mm, dpi),
            mm_to_px_rounded(self.height_mm, dpi),
        )
    }
}

/// Pixel dimensions of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of bytes in an RGB8 buffer of this size.
    pub fn rgb_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    /// Physical size this raster prints at for the given DPI.
    pub fn to_physical(self, dpi: u32) -> PhysicalSize {
        PhysicalSize::new(
            px_to_mm(self.width as f64, dpi),
            px_to_mm(self.height as f64, dpi),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_inch_is_dpi_pixels() {
        assert_eq!(mm_to_px(25.4, 96), 96.0);
        assert_eq!(mm_to_px(25.4, 300), 300.0);
    }

    #[test]
    fn test_mm_to_px_formula() {
        let px = mm_to_px(35.0, 300);
        assert!((px - 35.0 / 25.4 * 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_px_to_mm_inverse() {
        let mm = px_to_mm(mm_to_px(45.0, 300), 300);
        assert!((mm - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_px_to_mm_zero_dpi() {
        assert_eq!(px_to_mm(100.0, 0), 0.0);
    }

    #[test]
    fn test_passport_size_at_300_dpi() {
        let size = PhysicalSize::new(35.0, 45.0).to_pixels(300);
        assert_eq!(size, PixelSize::new(413, 531));
    }

    #[test]
    fn test_a4_at_300_dpi() {
        assert_eq!(A4.to_pixels(300), PixelSize::new(2480, 3508));
    }

    #[test]
    fn test_rounding_is_per_axis() {
        // 5mm @ 300dpi = 59.06, 2mm @ 300dpi = 23.62
        assert_eq!(mm_to_px_rounded(5.0, 300), 59);
        assert_eq!(mm_to_px_rounded(2.0, 300), 24);
    }

    #[test]
    fn test_rounded_saturates() {
        assert_eq!(mm_to_px_rounded(-10.0, 300), 0);
        assert_eq!(mm_to_px_rounded(f64::NAN, 300), 0);
    }

    #[test]
    fn test_pixel_size_helpers() {
        let size = PixelSize::new(10, 20);
        assert!(!size.is_empty());
        assert_eq!(size.rgb_len(), 600);
        assert!(PixelSize::new(0, 20).is_empty());
        assert!(PixelSize::default().is_empty());
    }

    #[test]
    fn test_pixel_size_to_physical() {
        let physical = PixelSize::new(300, 600).to_physical(300);
        assert!((physical.width_mm - 25.4).abs() < 1e-9);
        assert!((physical.height_mm - 50.8).abs() < 1e-9);
    }
}
