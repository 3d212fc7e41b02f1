//! A4 sheet layout and rendering bindings.

use crate::types::JsDecodedImage;
use passport_core::sheet::{render_sheet as core_render, SheetLayout, SheetRender};
use passport_core::settings::{sanitize_dpi, DEFAULT_DPI};
use passport_core::{PixelSize, SheetSettings};
use wasm_bindgen::prelude::*;

/// Grid of copies on a sheet.
#[wasm_bindgen]
pub struct JsSheetLayout {
    inner: SheetLayout,
}

#[wasm_bindgen]
impl JsSheetLayout {
    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 {
        self.inner.columns
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.inner.rows
    }

    /// Number of copies placed (`columns * rows`).
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> u32 {
        self.inner.total()
    }

    #[wasm_bindgen(getter)]
    pub fn sheet_width(&self) -> u32 {
        self.inner.sheet.width
    }

    #[wasm_bindgen(getter)]
    pub fn sheet_height(&self) -> u32 {
        self.inner.sheet.height
    }

    #[wasm_bindgen(getter)]
    pub fn copy_width(&self) -> u32 {
        self.inner.copy.width
    }

    #[wasm_bindgen(getter)]
    pub fn copy_height(&self) -> u32 {
        self.inner.copy.height
    }

    #[wasm_bindgen(getter)]
    pub fn margin_px(&self) -> u32 {
        self.inner.margin_px
    }

    #[wasm_bindgen(getter)]
    pub fn spacing_px(&self) -> u32 {
        self.inner.spacing_px
    }

    /// Copy positions as `{ column, row, x, y }` objects, row by row.
    pub fn placements(&self) -> Result<js_sys::Array, JsValue> {
        self.inner
            .placements()
            .map(|p| serde_wasm_bindgen::to_value(&p))
            .collect::<Result<js_sys::Array, _>>()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsSheetLayout {
    pub(crate) fn from_layout(inner: SheetLayout) -> Self {
        Self { inner }
    }
}

/// A rendered sheet with the layout actually drawn.
#[wasm_bindgen]
pub struct JsSheetRender {
    image: JsDecodedImage,
    layout: SheetLayout,
}

#[wasm_bindgen]
impl JsSheetRender {
    /// The sheet raster. Moves the pixels out; call once.
    pub fn take_image(self) -> JsDecodedImage {
        self.image
    }

    #[wasm_bindgen(getter)]
    pub fn layout(&self) -> JsSheetLayout {
        JsSheetLayout::from_layout(self.layout)
    }
}

impl JsSheetRender {
    pub(crate) fn from_render(render: SheetRender) -> Self {
        Self {
            image: JsDecodedImage::from_decoded(render.image),
            layout: render.layout,
        }
    }
}

/// Lay out copies of a `copy_width` x `copy_height` photo on an A4 sheet.
///
/// Margin and spacing are in millimeters. They and the DPI are clamped to
/// their control ranges; a zero or NaN DPI uses 300.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const layout = compute_sheet_layout(413, 531, 5, 2, 300);
/// label.textContent = `${layout.columns} x ${layout.rows} = ${layout.total}`;
/// ```
#[wasm_bindgen]
pub fn compute_sheet_layout(
    copy_width: u32,
    copy_height: u32,
    margin_mm: f64,
    spacing_mm: f64,
    dpi: f64,
) -> JsSheetLayout {
    JsSheetLayout::from_layout(SheetLayout::a4(
        PixelSize::new(copy_width, copy_height),
        &SheetSettings::new(margin_mm, spacing_mm),
        sanitize_dpi(dpi, DEFAULT_DPI),
    ))
}

/// Draw copies of `copy` onto a white sheet according to `layout`.
///
/// # Errors
///
/// Returns an error if the copy's pixel buffer does not match its dimensions.
#[wasm_bindgen]
pub fn render_sheet(
    copy: &JsDecodedImage,
    layout: &JsSheetLayout,
) -> Result<JsSheetRender, JsValue> {
    core_render(Some(&copy.to_decoded()), &layout.inner)
        .map(JsSheetRender::from_render)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
