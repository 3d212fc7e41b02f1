//! Export artifacts and their download names.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::sheet::SheetLayout;
use crate::units::PixelSize;

/// Errors that can occur while exporting a photo or sheet.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export yet
    #[error("No image loaded")]
    NoImage,

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// An encoded single photo ready for download.
#[derive(Debug, Clone)]
pub struct PhotoExport {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub size: PixelSize,
    pub dpi: u32,
}

/// An encoded sheet ready for download.
#[derive(Debug, Clone)]
pub struct SheetExport {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub layout: SheetLayout,
    pub dpi: u32,
}

/// `{preset}_{dpi}dpi.png`, e.g. `35x45mm_300dpi.png`.
pub fn photo_file_name(preset_id: &str, dpi: u32) -> String {
    format!("{}_{}dpi.png", preset_id, dpi)
}

/// `A4_{dpi}dpi.png`
pub fn sheet_file_name(dpi: u32) -> String {
    format!("A4_{}dpi.png", dpi)
}
