//! Layout reconstruction and rendering
//!
//! - [`layout`] - recovered elements and per-page aggregates
//! - [`transform`] - page space to grid space mapping
//! - [`render`] - ASCII grid and JSON record output
//! - [`extraction`] - the parse, transform and sort pipeline

pub mod extraction;
pub mod layout;
pub mod render;
pub mod transform;

pub use extraction::{ExtractionOptions, ParseMode, TextExtractor};
pub use layout::{PageLayout, TextElement};
pub use render::{write_records, RenderConfig};
pub use transform::{grid_x, grid_y, transform_page, transform_pages};
