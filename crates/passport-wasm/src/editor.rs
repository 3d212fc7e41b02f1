//! Editor session bindings.
//!
//! `PhotoEditor` and `SheetComposer` keep their state in WASM memory so the
//! page only forwards control changes and asks for a fresh render.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const editor = new PhotoEditor();
//! editor.load_image(new Uint8Array(await file.arrayBuffer()));
//! editor.scale = 1.3;
//! draw(editor.render(false));
//!
//! const sheet = new SheetComposer();
//! editor.use_in_sheet(sheet);
//! const file = sheet.export();
//! download(file.take_bytes(), file.file_name);
//! ```

use crate::sheet::{JsSheetLayout, JsSheetRender};
use crate::types::{interpolation, JsDecodedImage};
use passport_core::export::{PhotoExport, SheetExport};
use passport_core::InterpolationFilter;
use wasm_bindgen::prelude::*;

/// An encoded PNG ready for download.
#[wasm_bindgen]
pub struct JsExportFile {
    bytes: Vec<u8>,
    file_name: String,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsExportFile {
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.file_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// PNG bytes as Uint8Array (a copy).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// PNG bytes, moved out without copying.
    pub fn take_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<PhotoExport> for JsExportFile {
    fn from(export: PhotoExport) -> Self {
        Self {
            bytes: export.bytes,
            file_name: export.file_name,
            width: export.size.width,
            height: export.size.height,
        }
    }
}

impl From<SheetExport> for JsExportFile {
    fn from(export: SheetExport) -> Self {
        Self {
            bytes: export.bytes,
            file_name: export.file_name,
            width: export.layout.sheet.width,
            height: export.layout.sheet.height,
        }
    }
}

/// Single-photo editor session for JavaScript
#[wasm_bindgen]
pub struct PhotoEditor {
    inner: passport_core::PhotoEditor,
}

impl Default for PhotoEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PhotoEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: passport_core::PhotoEditor::new(),
        }
    }

    /// Decode and load an uploaded image, resetting scale, rotation and offset.
    ///
    /// On error the previous image stays loaded.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner
            .load_image(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    #[wasm_bindgen(getter)]
    pub fn preset_id(&self) -> String {
        self.inner.preset().id.to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_preset_id(&mut self, id: &str) {
        self.inner.set_preset(id);
    }

    #[wasm_bindgen(getter)]
    pub fn dpi(&self) -> u32 {
        self.inner.dpi()
    }

    /// Set DPI; zero or NaN keeps the current value.
    #[wasm_bindgen(setter)]
    pub fn set_dpi(&mut self, value: f64) {
        self.inner.set_dpi(value);
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.transform().scale
    }

    #[wasm_bindgen(setter)]
    pub fn set_scale(&mut self, value: f64) {
        self.inner.set_scale(value);
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.transform().rotation_degrees
    }

    #[wasm_bindgen(setter)]
    pub fn set_rotation(&mut self, value: f64) {
        self.inner.set_rotation(value);
    }

    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> f64 {
        self.inner.transform().offset_x
    }

    #[wasm_bindgen(setter)]
    pub fn set_offset_x(&mut self, value: f64) {
        self.inner.set_offset(value, self.inner.transform().offset_y);
    }

    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> f64 {
        self.inner.transform().offset_y
    }

    #[wasm_bindgen(setter)]
    pub fn set_offset_y(&mut self, value: f64) {
        self.inner.set_offset(self.inner.transform().offset_x, value);
    }

    /// Move the photo by a drag delta in canvas pixels.
    pub fn nudge(&mut self, dx: f64, dy: f64) {
        let t = self.inner.transform();
        self.inner.set_offset(t.offset_x + dx, t.offset_y + dy);
    }

    pub fn reset_transform(&mut self) {
        self.inner.reset_transform();
    }

    #[wasm_bindgen(getter)]
    pub fn high_quality(&self) -> bool {
        self.inner.filter() == InterpolationFilter::Lanczos3
    }

    /// Use Lanczos3 for export and sheet handover, otherwise bilinear.
    #[wasm_bindgen(setter)]
    pub fn set_high_quality(&mut self, value: bool) {
        self.inner.set_filter(interpolation(value));
    }

    #[wasm_bindgen(getter)]
    pub fn target_width(&self) -> u32 {
        self.inner.target_size().width
    }

    #[wasm_bindgen(getter)]
    pub fn target_height(&self) -> u32 {
        self.inner.target_size().height
    }

    /// Render the current state. Without an image the canvas is blank white.
    pub fn render(&self, use_lanczos: bool) -> JsDecodedImage {
        JsDecodedImage::from_decoded(self.inner.render(interpolation(use_lanczos)))
    }

    /// Encode the photo as `{preset}_{dpi}dpi.png`.
    ///
    /// # Errors
    ///
    /// Returns an error if no image is loaded.
    pub fn export(&self) -> Result<JsExportFile, JsValue> {
        self.inner
            .export()
            .map(JsExportFile::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Hand the rendered photo and its DPI to `sheet`.
    ///
    /// Returns false, leaving `sheet` unchanged, if no image is loaded.
    pub fn use_in_sheet(&self, sheet: &mut SheetComposer) -> bool {
        match self.inner.sheet_source() {
            Some(source) => {
                sheet.inner.set_source(source);
                true
            }
            None => false,
        }
    }
}

/// A4 sheet session for JavaScript
#[wasm_bindgen]
pub struct SheetComposer {
    inner: passport_core::SheetComposer,
}

impl Default for SheetComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SheetComposer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: passport_core::SheetComposer::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn has_source(&self) -> bool {
        self.inner.source().is_some()
    }

    /// DPI of the handed-over photo, 300 without one.
    #[wasm_bindgen(getter)]
    pub fn dpi(&self) -> u32 {
        self.inner.dpi()
    }

    #[wasm_bindgen(getter)]
    pub fn margin_mm(&self) -> f64 {
        self.inner.settings().margin_mm
    }

    #[wasm_bindgen(setter)]
    pub fn set_margin_mm(&mut self, value: f64) {
        self.inner.set_margin(value);
    }

    #[wasm_bindgen(getter)]
    pub fn spacing_mm(&self) -> f64 {
        self.inner.settings().spacing_mm
    }

    #[wasm_bindgen(setter)]
    pub fn set_spacing_mm(&mut self, value: f64) {
        self.inner.set_spacing(value);
    }

    pub fn clear_source(&mut self) {
        self.inner.clear_source();
    }

    pub fn layout(&self) -> JsSheetLayout {
        JsSheetLayout::from_layout(self.inner.layout())
    }

    /// Render the sheet. Without a source the sheet is blank.
    pub fn render(&self) -> Result<JsSheetRender, JsValue> {
        self.inner
            .render()
            .map(JsSheetRender::from_render)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Encode the sheet as `A4_{dpi}dpi.png`.
    ///
    /// # Errors
    ///
    /// Returns an error if no photo has been handed over.
    pub fn export(&self) -> Result<JsExportFile, JsValue> {
        self.inner
            .export()
            .map(JsExportFile::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
