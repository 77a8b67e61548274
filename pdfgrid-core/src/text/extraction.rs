//! Layout extraction from page content lines
//!
//! Ties the parsers, the transformer and sorting together: pick a dialect
//! once for the whole run, parse every page with it, then map the pages
//! onto the output grid.

use super::render::RenderConfig;
use super::transform::transform_pages;
use super::PageLayout;
use crate::page::Page;
use crate::parser::{detect_format, parse_pages, parse_pages_bytes, Format};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How content lines should be interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Inspect the pages and pick a dialect
    #[default]
    Auto,
    /// Force placement-driven parsing
    Positioned,
    /// Force byte-string parsing
    Bytes,
}

/// Layout extraction options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    /// Dialect override; `Auto` runs format detection
    pub mode: ParseMode,
}

/// Layout extractor for decoded pages
pub struct TextExtractor {
    options: ExtractionOptions,
}

impl TextExtractor {
    /// Create a new extractor with default options
    pub fn new() -> Self {
        Self {
            options: ExtractionOptions::default(),
        }
    }

    /// Create an extractor with custom options
    pub fn with_options(options: ExtractionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Dialect used for `pages`.
    pub fn resolve_format(&self, pages: &[Page]) -> Format {
        match self.options.mode {
            ParseMode::Positioned => Format::Positioned,
            ParseMode::Bytes => Format::Bytes,
            ParseMode::Auto => {
                let format = detect_format(pages);
                debug!(%format, pages = pages.len(), "detected content format");
                format
            }
        }
    }

    /// Parses every page without mapping it onto the grid.
    pub fn parse_pages(&self, pages: &[Page]) -> Vec<PageLayout> {
        match self.resolve_format(pages) {
            Format::Positioned => parse_pages(pages),
            Format::Bytes => parse_pages_bytes(pages),
        }
    }

    /// Parses, transforms and sorts every page, ready for rendering.
    pub fn extract(&self, pages: &[Page], config: &RenderConfig) -> Vec<PageLayout> {
        let mut layouts = self.parse_pages(pages);
        transform_pages(&mut layouts, config);
        layouts
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
