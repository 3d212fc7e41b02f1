//! Passport Core - Passport photo processing library
//!
//! This crate provides the core functionality of the passport photo maker:
//! unit conversion, the single-photo compositor, A4 sheet tiling, and PNG
//! export.

pub mod decode;
pub mod editor;
pub mod encode;
pub mod export;
pub mod preset;
pub mod settings;
pub mod sheet;
pub mod transform;
pub mod units;

pub use decode::{decode_image, DecodeError, DecodedImage};
pub use editor::{PhotoEditor, SheetComposer, SheetSource};
pub use encode::{encode_png, EncodeError};
pub use export::{photo_file_name, sheet_file_name, ExportError, PhotoExport, SheetExport};
pub use preset::{find_preset, SizePreset, PRESETS};
pub use settings::{sanitize_dpi, PhotoTransform, SheetSettings};
pub use sheet::{render_sheet, Placement, SheetLayout, SheetRender};
pub use transform::{compose_photo, InterpolationFilter};
pub use units::{mm_to_px, px_to_mm, PhysicalSize, PixelSize, A4};
