//! Image decoding for uploaded photos.
//!
//! This module provides functionality for:
//! - Decoding any supported raster format (JPEG, PNG, GIF, BMP, WebP)
//! - Applying EXIF orientation and flattening transparency
//! - Resizing to exact dimensions
//!
//! All operations are synchronous. A failed decode leaves the caller's state
//! untouched; the UI treats it as "no image loaded".
//!
//! # Examples
//!
//! ```ignore
//! use passport_core::decode::decode_image;
//!
//! let bytes = std::fs::read("portrait.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod resize;
mod types;

pub use reader::{decode_image, get_orientation};
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType, Orientation, WHITE};
