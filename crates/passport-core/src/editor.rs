//! Editing sessions for the single photo and the print sheet.
//!
//! Both sessions keep only their current parameters. Every render is
//! recomputed from scratch, so the same state always yields the same pixels.

use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::encode_image;
use crate::export::{photo_file_name, sheet_file_name, ExportError, PhotoExport, SheetExport};
use crate::preset::{default_preset, find_preset, SizePreset};
use crate::settings::{sanitize_dpi, PhotoTransform, SheetSettings, DEFAULT_DPI};
use crate::sheet::{render_sheet, SheetLayout, SheetRender};
use crate::transform::{compose_photo, InterpolationFilter};
use crate::units::PixelSize;

/// A rendered photo handed over to the sheet, with the DPI it was made at.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSource {
    pub photo: DecodedImage,
    pub dpi: u32,
}

/// State of the single-photo editor.
#[derive(Debug, Clone)]
pub struct PhotoEditor {
    image: Option<DecodedImage>,
    preset: &'static SizePreset,
    dpi: u32,
    transform: PhotoTransform,
    filter: InterpolationFilter,
}

impl Default for PhotoEditor {
    fn default() -> Self {
        Self {
            image: None,
            preset: default_preset(),
            dpi: DEFAULT_DPI,
            transform: PhotoTransform::default(),
            filter: InterpolationFilter::default(),
        }
    }
}

impl PhotoEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes` and make it the current image.
    ///
    /// On success the transform is reset. On failure the previous image and
    /// transform are kept.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        match decode_image(bytes) {
            Ok(image) => {
                self.set_image(image);
                Ok(())
            }
            Err(e) => {
                log::warn!("image load rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Replace the current image with an already decoded one.
    pub fn set_image(&mut self, image: DecodedImage) {
        log::debug!("loaded {}x{} image", image.width, image.height);
        self.image = Some(image);
        self.transform = PhotoTransform::default();
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn preset(&self) -> &'static SizePreset {
        self.preset
    }

    /// Select a preset by id. Unknown ids select the default preset.
    pub fn set_preset(&mut self, id: &str) {
        self.preset = find_preset(id);
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Set the DPI from raw input; see [`sanitize_dpi`].
    pub fn set_dpi(&mut self, dpi: f64) {
        self.dpi = sanitize_dpi(dpi, self.dpi);
    }

    pub fn transform(&self) -> PhotoTransform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: PhotoTransform) {
        self.transform = transform.sanitized();
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.set_transform(PhotoTransform {
            scale,
            ..self.transform
        });
    }

    pub fn set_rotation(&mut self, rotation_degrees: f64) {
        self.set_transform(PhotoTransform {
            rotation_degrees,
            ..self.transform
        });
    }

    pub fn set_offset(&mut self, offset_x: f64, offset_y: f64) {
        self.set_transform(PhotoTransform {
            offset_x,
            offset_y,
            ..self.transform
        });
    }

    /// Reset scale, rotation and offset.
    pub fn reset_transform(&mut self) {
        self.transform = PhotoTransform::default();
    }

    pub fn filter(&self) -> InterpolationFilter {
        self.filter
    }

    /// Interpolation used by [`export`](Self::export) and
    /// [`sheet_source`](Self::sheet_source).
    pub fn set_filter(&mut self, filter: InterpolationFilter) {
        self.filter = filter;
    }

    /// Output size of the current preset at the current DPI.
    pub fn target_size(&self) -> PixelSize {
        self.preset.pixel_size(self.dpi)
    }

    /// Render the current state with `filter`.
    pub fn render(&self, filter: InterpolationFilter) -> DecodedImage {
        compose_photo(
            self.image.as_ref(),
            self.target_size(),
            &self.transform,
            filter,
        )
    }

    /// Render and encode the photo for download.
    pub fn export(&self) -> Result<PhotoExport, ExportError> {
        if self.image.is_none() {
            return Err(ExportError::NoImage);
        }
        let photo = self.render(self.filter);
        let bytes = encode_image(&photo)?;
        Ok(PhotoExport {
            bytes,
            file_name: photo_file_name(self.preset.id, self.dpi),
            size: photo.size(),
            dpi: self.dpi,
        })
    }

    /// The rendered photo for tiling onto a sheet, if an image is loaded.
    pub fn sheet_source(&self) -> Option<SheetSource> {
        self.image.as_ref()?;
        Some(SheetSource {
            photo: self.render(self.filter),
            dpi: self.dpi,
        })
    }
}

/// State of the A4 sheet view.
#[derive(Debug, Clone, Default)]
pub struct SheetComposer {
    source: Option<SheetSource>,
    settings: SheetSettings,
}

impl SheetComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&SheetSource> {
        self.source.as_ref()
    }

    pub fn set_source(&mut self, source: SheetSource) {
        log::debug!(
            "sheet source {}x{} at {} dpi",
            source.photo.width,
            source.photo.height,
            source.dpi
        );
        self.source = Some(source);
    }

    pub fn clear_source(&mut self) {
        self.source = None;
    }

    pub fn settings(&self) -> SheetSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: SheetSettings) {
        self.settings = settings.sanitized();
    }

    pub fn set_margin(&mut self, margin_mm: f64) {
        self.set_settings(SheetSettings {
            margin_mm,
            ..self.settings
        });
    }

    pub fn set_spacing(&mut self, spacing_mm: f64) {
        self.set_settings(SheetSettings {
            spacing_mm,
            ..self.settings
        });
    }

    /// DPI of the source photo, or the default when there is none.
    pub fn dpi(&self) -> u32 {
        self.source.as_ref().map_or(DEFAULT_DPI, |s| s.dpi)
    }

    fn copy_size(&self) -> PixelSize {
        self.source
            .as_ref()
            .map_or(PixelSize::default(), |s| s.photo.size())
    }

    /// Grid for the current source and settings.
    pub fn layout(&self) -> SheetLayout {
        SheetLayout::a4(self.copy_size(), &self.settings, self.dpi())
    }

    /// Render the sheet. Without a source the sheet is blank.
    pub fn render(&self) -> Result<SheetRender, DecodeError> {
        let layout = self.layout();
        render_sheet(self.source.as_ref().map(|s| &s.photo), &layout)
    }

    /// Render and encode the sheet for download.
    pub fn export(&self) -> Result<SheetExport, ExportError> {
        match &self.source {
            Some(s) if !s.photo.is_empty() => {}
            _ => return Err(ExportError::NoImage),
        }
        let render = self.render()?;
        let bytes = encode_image(&render.image)?;
        let dpi = self.dpi();
        Ok(SheetExport {
            bytes,
            file_name: sheet_file_name(dpi),
            layout: render.layout,
            dpi,
        })
    }
}
