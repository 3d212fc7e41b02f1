//! Placement of the source photo on the passport-size canvas.
//!
//! # Transform Order
//!
//! The user's transform is applied as a single composed mapping:
//! 1. Scale (uniform, about the image center)
//! 2. Rotation (about the image center)
//! 3. Translation to the canvas center plus the offset
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Offsets are in output canvas pixels

mod compose;
mod sample;

pub use compose::{compose_photo, transformed_extent};
pub use sample::InterpolationFilter;
