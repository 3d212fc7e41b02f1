//! Image encoding for export.
//!
//! Exports are always PNG: lossless, so the printed copies match the
//! preview pixel for pixel.
//!
//! # Examples
//!
//! ```ignore
//! use passport_core::encode::encode_png;
//!
//! let pixels = vec![255u8; 413 * 531 * 3]; // Blank passport photo
//! let png_bytes = encode_png(&pixels, 413, 531).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_image, encode_png, EncodeError, PNG_SIGNATURE};
