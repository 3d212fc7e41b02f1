//! Standard photo sizes.

use serde::Serialize;

use crate::units::{PhysicalSize, PixelSize};

/// A named physical output size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizePreset {
    /// Stable identifier, also used in export file names.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl SizePreset {
    /// Physical size of this preset.
    pub fn size(&self) -> PhysicalSize {
        PhysicalSize::new(self.width_mm, self.height_mm)
    }

    /// Output pixel size at the given DPI.
    pub fn pixel_size(&self, dpi: u32) -> PixelSize {
        self.size().to_pixels(dpi)
    }
}

/// Supported presets. The first entry is the default.
pub const PRESETS: [SizePreset; 4] = [
    SizePreset {
        id: "35x45mm",
        label: "35 x 45 mm (EU/IN)",
        width_mm: 35.0,
        height_mm: 45.0,
    },
    SizePreset {
        id: "2x2in",
        label: "2 x 2 inch (US)",
        width_mm: 50.8,
        height_mm: 50.8,
    },
    SizePreset {
        id: "40x50mm",
        label: "40 x 50 mm",
        width_mm: 40.0,
        height_mm: 50.0,
    },
    SizePreset {
        id: "30x40mm",
        label: "30 x 40 mm",
        width_mm: 30.0,
        height_mm: 40.0,
    },
];

/// The default preset (35 x 45 mm).
pub fn default_preset() -> &'static SizePreset {
    &PRESETS[0]
}

/// Look up a preset by id, falling back to the default for unknown ids.
pub fn find_preset(id: &str) -> &'static SizePreset {
    PRESETS
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&PRESETS[0])
}
