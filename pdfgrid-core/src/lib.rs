//! # pdfgrid
//!
//! Rebuilds a readable, spatially faithful text rendition of PDF pages from
//! their decoded content-stream lines.
//!
//! ## Features
//!
//! - **Line classification**: placement (`Tm`), show-text (`Tj`/`TJ`),
//!   font selection (`Tf`) and end-of-text (`ET`) lines
//! - **Two content dialects**: placement-driven streams and byte-string
//!   streams, detected automatically
//! - **Grid mapping**: page space (bottom-left origin) onto a fixed
//!   character grid (top-left origin), with optional right-edge fitting
//! - **Output**: ASCII-art pages or JSON element records
//!
//! The crate does not open PDF files. Pages arrive already split into
//! lines, either built directly as [`Page`] values or loaded through
//! [`source`].
//!
//! ## Quick Start
//!
//! ```rust
//! use pdfgrid::{Page, RenderConfig, TextExtractor};
//!
//! let page = Page::new(
//!     1,
//!     100.0,
//!     100.0,
//!     vec!["1 0 0 1 0 90 Tm".into(), "(Hello) Tj".into()],
//! );
//!
//! let config = RenderConfig { width: 12, height: 10, ..Default::default() };
//! let layouts = TextExtractor::new().extract(&[page], &config);
//!
//! assert_eq!(config.render_to_string(&layouts), "            \n Hello\n");
//! ```
//!
//! ## Modules
//!
//! - [`parser`] - line classification, payload decoding, both dialect parsers
//! - [`text`] - layouts, grid transformation, rendering, the extraction pipeline
//! - [`source`] - loading pages from page dumps or content-stream text
//! - [`page`] - the input page record
//! - [`error`] - error types

pub mod error;
pub mod page;
pub mod parser;
pub mod source;
pub mod text;

pub use error::{LayoutError, Result};
pub use page::Page;
pub use parser::{detect_format, Format, LineKind};
pub use source::{load_pages, InputFormat, SourceOptions};
pub use text::{
    write_records, ExtractionOptions, PageLayout, ParseMode, RenderConfig, TextElement,
    TextExtractor,
};

/// Current version of pdfgrid
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
