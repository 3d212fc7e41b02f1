//! Tiling copies of the finished photo onto a print sheet.
//!
//! Layout and rendering are separate so a UI can report the copy count
//! without rasterizing the whole sheet.
//!
//! # Example
//!
//! ```ignore
//! use passport_core::sheet::{render_sheet, SheetLayout};
//! use passport_core::SheetSettings;
//!
//! let layout = SheetLayout::a4(photo.size(), &SheetSettings::default(), 300);
//! let render = render_sheet(Some(&photo), &layout)?;
//! println!("{} copies", render.layout.total());
//! ```

mod layout;
mod render;

pub use layout::{Placement, SheetLayout};
pub use render::{render_sheet, SheetRender};
