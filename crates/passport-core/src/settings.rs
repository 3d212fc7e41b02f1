//! User-facing control values and their bounds.
//!
//! Every control has a closed range and a default. Sanitizing never fails:
//! out-of-range values are clamped, and non-numeric input (NaN or infinity,
//! which is what a browser number field yields for garbage) falls back to a
//! per-control value.
//!
//! | Control     | Range            | Default | Fallback       |
//! |-------------|------------------|---------|----------------|
//! | DPI         | 100 to 600       | 300     | last known DPI |
//! | Scale       | 0.2 to 4.0       | 1.0     | 1.0            |
//! | Rotation    | -180 to 180 deg  | 0       | 0              |
//! | Offset X/Y  | -5000 to 5000 px | 0       | 0              |
//! | Margin      | 0 to 30 mm       | 5       | 0              |
//! | Spacing     | 0 to 20 mm       | 2       | 0              |

use serde::{Deserialize, Serialize};

pub const DPI_MIN: u32 = 100;
pub const DPI_MAX: u32 = 600;
pub const DEFAULT_DPI: u32 = 300;

/// Range, default and fallback for a real-valued control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    /// Initial value of the control.
    pub default: f64,
    /// Value used when the input is not a finite number.
    pub fallback: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64, default: f64, fallback: f64) -> Self {
        Self {
            min,
            max,
            default,
            fallback,
        }
    }

    /// Clamp a raw input into range, substituting the fallback for non-finite input.
    pub fn sanitize(&self, value: f64) -> f64 {
        let value = if value.is_finite() {
            value
        } else {
            self.fallback
        };
        value.clamp(self.min, self.max)
    }

    /// Whether a value is already within range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const SCALE: Bounds = Bounds::new(0.2, 4.0, 1.0, 1.0);
pub const ROTATION: Bounds = Bounds::new(-180.0, 180.0, 0.0, 0.0);
pub const OFFSET: Bounds = Bounds::new(-5000.0, 5000.0, 0.0, 0.0);
pub const MARGIN_MM: Bounds = Bounds::new(0.0, 30.0, 5.0, 0.0);
pub const SPACING_MM: Bounds = Bounds::new(0.0, 20.0, 2.0, 0.0);

/// Sanitize a DPI value typed by the user.
///
/// Zero and non-numeric input keep `last_known`; anything else is rounded to
/// an integer and clamped to [`DPI_MIN`]..=[`DPI_MAX`].
pub fn sanitize_dpi(input: f64, last_known: u32) -> u32 {
    let dpi = if !input.is_finite() || input == 0.0 {
        last_known as f64
    } else {
        input.round()
    };
    let clamped = dpi.clamp(DPI_MIN as f64, DPI_MAX as f64) as u32;
    if clamped as f64 != input {
        log::trace!("dpi input {} sanitized to {}", input, clamped);
    }
    clamped
}

/// How the source photo is placed on the output canvas.
///
/// The image is scaled uniformly, rotated about its own center (positive
/// angles turn clockwise on screen), and its center placed at the canvas
/// center shifted by the offset. The offset is in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoTransform {
    pub scale: f64,
    pub rotation_degrees: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for PhotoTransform {
    fn default() -> Self {
        Self {
            scale: SCALE.default,
            rotation_degrees: ROTATION.default,
            offset_x: OFFSET.default,
            offset_y: OFFSET.default,
        }
    }
}

impl PhotoTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Copy with every field clamped into its control range.
    pub fn sanitized(self) -> Self {
        let out = Self {
            scale: SCALE.sanitize(self.scale),
            rotation_degrees: ROTATION.sanitize(self.rotation_degrees),
            offset_x: OFFSET.sanitize(self.offset_x),
            offset_y: OFFSET.sanitize(self.offset_y),
        };
        if out != self {
            log::trace!("transform {:?} sanitized to {:?}", self, out);
        }
        out
    }
}

/// Margin and spacing of the print sheet, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetSettings {
    pub margin_mm: f64,
    pub spacing_mm: f64,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            margin_mm: MARGIN_MM.default,
            spacing_mm: SPACING_MM.default,
        }
    }
}

impl SheetSettings {
    pub fn new(margin_mm: f64, spacing_mm: f64) -> Self {
        Self {
            margin_mm,
            spacing_mm,
        }
    }

    /// Copy with margin and spacing clamped into range.
    pub fn sanitized(self) -> Self {
        let out = Self {
            margin_mm: MARGIN_MM.sanitize(self.margin_mm),
            spacing_mm: SPACING_MM.sanitize(self.spacing_mm),
        };
        if out != self {
            log::trace!("sheet settings {:?} sanitized to {:?}", self, out);
        }
        out
    }
}
