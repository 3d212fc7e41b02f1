//! Rasterizing a sheet layout.

use crate::decode::{resize, DecodeError, DecodedImage, FilterType};

use super::SheetLayout;

/// A rendered sheet and the layout actually drawn on it.
#[derive(Debug, Clone)]
pub struct SheetRender {
    pub image: DecodedImage,
    /// Zero columns and rows when nothing was drawn.
    pub layout: SheetLayout,
}

/// Draw copies of `copy` onto a white sheet according to `layout`.
///
/// A copy whose dimensions differ from `layout.copy` is resized to it first.
/// With no copy, or a zero-sized copy, the sheet is left blank and the
/// returned layout reports zero copies.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the copy's pixel buffer does not
/// match its declared dimensions.
pub fn render_sheet(
    copy: Option<&DecodedImage>,
    layout: &SheetLayout,
) -> Result<SheetRender, DecodeError> {
    let mut sheet = DecodedImage::white(layout.sheet);

    let copy = match copy {
        Some(c) if !c.is_empty() && !layout.copy.is_empty() => c,
        _ => {
            log::debug!(
                "rendered blank {}x{} sheet (no copy)",
                layout.sheet.width,
                layout.sheet.height
            );
            return Ok(SheetRender {
                image: sheet,
                layout: layout.emptied(),
            });
        }
    };

    let resized;
    let copy = if copy.size() == layout.copy {
        copy
    } else {
        resized = resize(copy, layout.copy, FilterType::Lanczos3)?;
        &resized
    };
    if copy.pixels.len() != layout.copy.rgb_len() {
        return Err(DecodeError::CorruptedFile(format!(
            "copy buffer holds {} bytes, expected {}",
            copy.pixels.len(),
            layout.copy.rgb_len()
        )));
    }

    let sheet_stride = layout.sheet.width as usize * 3;
    let copy_stride = layout.copy.width as usize * 3;

    for placement in layout.placements() {
        for row in 0..layout.copy.height as usize {
            let src_start = row * copy_stride;
            let dst_start =
                (placement.y as usize + row) * sheet_stride + placement.x as usize * 3;
            sheet.pixels[dst_start..dst_start + copy_stride]
                .copy_from_slice(&copy.pixels[src_start..src_start + copy_stride]);
        }
    }

    log::debug!(
        "rendered {}x{} sheet with {} copies",
        layout.sheet.width,
        layout.sheet.height,
        layout.total()
    );

    Ok(SheetRender {
        image: sheet,
        layout: *layout,
    })
}
