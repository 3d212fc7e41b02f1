//! Grid layout of photo copies on a print sheet.
//!
//! The usable area is the sheet minus the margin on every side. Along each
//! axis, `n` copies of size `c` separated by spacing `s` need `n*c + (n-1)*s`
//! pixels, so the largest `n` that fits is
//!
//! ```text
//! n = floor((usable + s) / (c + s))
//! ```
//!
//! clamped to zero. Copies start at `(margin, margin)` and advance by
//! `c + s`, left to right and top to bottom.

use serde::Serialize;

use crate::settings::SheetSettings;
use crate::units::{mm_to_px_rounded, PixelSize, A4};

/// Position of one copy on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub column: u32,
    pub row: u32,
    /// Left edge in sheet pixels.
    pub x: u32,
    /// Top edge in sheet pixels.
    pub y: u32,
}

/// Computed grid of copies for one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLayout {
    pub sheet: PixelSize,
    pub copy: PixelSize,
    pub margin_px: u32,
    pub spacing_px: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SheetLayout {
    /// Compute the grid for a sheet and copy size in pixels.
    pub fn compute(sheet: PixelSize, copy: PixelSize, margin_px: u32, spacing_px: u32) -> Self {
        let (columns, rows) = if copy.is_empty() {
            (0, 0)
        } else {
            let usable_w = sheet.width as i64 - 2 * margin_px as i64;
            let usable_h = sheet.height as i64 - 2 * margin_px as i64;
            (
                fit_count(usable_w, copy.width, spacing_px),
                fit_count(usable_h, copy.height, spacing_px),
            )
        };

        let layout = Self {
            sheet,
            copy,
            margin_px,
            spacing_px,
            columns,
            rows,
        };
        log::debug!(
            "sheet {}x{}: {} x {} copies of {}x{} (margin {}px, spacing {}px)",
            sheet.width,
            sheet.height,
            columns,
            rows,
            copy.width,
            copy.height,
            margin_px,
            spacing_px
        );
        layout
    }

    /// Layout on an A4 sheet at `dpi`, converting margin and spacing from mm.
    pub fn a4(copy: PixelSize, settings: &SheetSettings, dpi: u32) -> Self {
        let settings = settings.sanitized();
        Self::compute(
            A4.to_pixels(dpi),
            copy,
            mm_to_px_rounded(settings.margin_mm, dpi),
            mm_to_px_rounded(settings.spacing_mm, dpi),
        )
    }

    /// Same sheet and spacing with no copies placed.
    pub fn emptied(self) -> Self {
        Self {
            columns: 0,
            rows: 0,
            ..self
        }
    }

    /// Total number of copies placed, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Usable area inside the margins; negative when the margins overlap.
    pub fn usable_area(&self) -> (i64, i64) {
        (
            self.sheet.width as i64 - 2 * self.margin_px as i64,
            self.sheet.height as i64 - 2 * self.margin_px as i64,
        )
    }

    /// Copy positions, row by row.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        let step_x = self.copy.width + self.spacing_px;
        let step_y = self.copy.height + self.spacing_px;
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| Placement {
                column,
                row,
                x: self.margin_px + column * step_x,
                y: self.margin_px + row * step_y,
            })
        })
    }
}

/// Number of `copy`-sized cells with `spacing` gaps fitting in `usable`.
fn fit_count(usable: i64, copy: u32, spacing: u32) -> u32 {
    let step = copy as i64 + spacing as i64;
    let room = usable + spacing as i64;
    if step <= 0 || room <= 0 {
        return 0;
    }
    (room / step) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_passport_at_300_dpi() {
        let layout = SheetLayout::compute(
            PixelSize::new(2480, 3508),
            PixelSize::new(413, 531),
            59,
            24,
        );
        assert_eq!(layout.columns, 5);
        assert_eq!(layout.rows, 6);
        assert_eq!(layout.total(), 30);
    }

    #[test]
    fn test_a4_from_millimeters() {
        let layout = SheetLayout::a4(PixelSize::new(413, 531), &SheetSettings::new(5.0, 2.0), 300);
        assert_eq!(layout.sheet, PixelSize::new(2480, 3508));
        assert_eq!(layout.margin_px, 59);
        assert_eq!(layout.spacing_px, 24);
        assert_eq!((layout.columns, layout.rows), (5, 6));
    }

    #[test]
    fn test_zero_copy_size() {
        let sheet = PixelSize::new(2480, 3508);
        let layout = SheetLayout::compute(sheet, PixelSize::new(0, 531), 59, 24);
        assert_eq!((layout.columns, layout.rows, layout.total()), (0, 0, 0));

        let layout = SheetLayout::compute(sheet, PixelSize::new(413, 0), 59, 24);
        assert_eq!((layout.columns, layout.rows, layout.total()), (0, 0, 0));
    }

    #[test]
    fn test_copy_larger_than_sheet() {
        let layout = SheetLayout::compute(PixelSize::new(100, 100), PixelSize::new(200, 50), 0, 0);
        assert_eq!(layout.columns, 0);
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.total(), 0);
        assert!(layout.is_empty());
    }

    #[test]
    fn test_margins_exceed_sheet() {
        let layout = SheetLayout::compute(PixelSize::new(100, 100), PixelSize::new(10, 10), 60, 0);
        assert_eq!(layout.usable_area(), (-20, -20));
        assert_eq!(layout.total(), 0);
    }

    #[test]
    fn test_exact_fit_without_spacing() {
        let layout = SheetLayout::compute(PixelSize::new(100, 60), PixelSize::new(20, 20), 0, 0);
        assert_eq!((layout.columns, layout.rows), (5, 3));
    }

    #[test]
    fn test_spacing_not_needed_after_last_copy() {
        // 3 copies of 30 with two gaps of 5 need exactly 100
        let layout = SheetLayout::compute(PixelSize::new(100, 30), PixelSize::new(30, 30), 0, 5);
        assert_eq!(layout.columns, 3);
        // One pixel less and only two fit
        let layout = SheetLayout::compute(PixelSize::new(99, 30), PixelSize::new(30, 30), 0, 5);
        assert_eq!(layout.columns, 2);
    }

    #[test]
    fn test_placements_order_and_positions() {
        let layout = SheetLayout::compute(PixelSize::new(100, 80), PixelSize::new(20, 30), 5, 4);
        let placements: Vec<_> = layout.placements().collect();
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.rows, 2);
        assert_eq!(placements.len(), 6);
        assert_eq!(placements[0], Placement { column: 0, row: 0, x: 5, y: 5 });
        assert_eq!(placements[1], Placement { column: 1, row: 0, x: 29, y: 5 });
        assert_eq!(placements[3], Placement { column: 0, row: 1, x: 5, y: 39 });
        assert_eq!(placements[5], Placement { column: 2, row: 1, x: 53, y: 39 });
    }

    #[test]
    fn test_emptied_keeps_geometry() {
        let layout = SheetLayout::a4(PixelSize::new(413, 531), &SheetSettings::default(), 300);
        let empty = layout.emptied();
        assert_eq!(empty.total(), 0);
        assert_eq!(empty.sheet, layout.sheet);
        assert_eq!(empty.placements().count(), 0);
    }

    #[test]
    fn test_total_saturates_for_huge_grids() {
        let layout = SheetLayout::a4(PixelSize::new(1, 1), &SheetSettings::new(0.0, 0.0), u32::MAX);
        assert_eq!(layout.sheet, PixelSize::new(u32::MAX, u32::MAX));
        assert_eq!(layout.total(), u32::MAX);
        assert!(!layout.is_empty());
    }

    #[test]
    fn test_settings_are_sanitized() {
        let settings = SheetSettings::new(-5.0, f64::NAN);
        let layout = SheetLayout::a4(PixelSize::new(413, 531), &settings, 300);
        assert_eq!(layout.margin_px, 0);
        assert_eq!(layout.spacing_px, 0);
    }
}
