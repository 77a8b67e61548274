//! Page input
//!
//! The document engine that opens and decompresses PDFs lives outside this
//! crate. Its output reaches us in one of two shapes:
//!
//! - a JSON page dump: `[{"width":612,"height":792,"page":1,"lines":[..]}, ..]`,
//!   the same records `write_records` produces for raw lines
//! - decompressed content-stream text, one page per form feed (`\x0c`)

use crate::error::Result;
use crate::page::Page;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Shape of a page input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Json,
    #[serde(rename = "stream")]
    ContentStream,
}

impl InputFormat {
    /// `.json` files are page dumps, anything else is content-stream text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::ContentStream,
        }
    }
}

/// How to read a page input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    pub format: InputFormat,
    /// Page width for content-stream input, in points
    pub page_width: f64,
    /// Page height for content-stream input, in points
    pub page_height: f64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            format: InputFormat::ContentStream,
            page_width: 612.0,
            page_height: 792.0,
        }
    }
}

/// Reads a JSON page dump.
///
/// `null` entries stand for pages the engine could not split and are
/// dropped. Every remaining page must have a usable size.
pub fn load_json_pages<R: Read>(reader: R) -> Result<Vec<Page>> {
    let entries: Vec<Option<Page>> = serde_json::from_reader(reader)?;
    let pages: Vec<Page> = entries.into_iter().flatten().collect();
    for page in &pages {
        page.validate()?;
    }
    debug!(pages = pages.len(), "loaded page dump");
    Ok(pages)
}

/// Reads decompressed content-stream text, splitting pages at form feeds.
pub fn load_content_stream<R: Read>(
    mut reader: R,
    page_width: f64,
    page_height: f64,
) -> Result<Vec<Page>> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let content = String::from_utf8_lossy(&raw);

    let mut chunks: Vec<&str> = content.split('\x0c').collect();
    if chunks.len() > 1 && chunks.last().is_some_and(|c| c.trim().is_empty()) {
        chunks.pop();
    }

    let pages = chunks
        .into_iter()
        .zip(1u32..)
        .map(|(chunk, number)| {
            let lines = chunk.lines().map(str::to_string).collect();
            let page = Page::new(number, page_width, page_height, lines);
            page.validate().map(|_| page)
        })
        .collect::<Result<Vec<Page>>>()?;
    debug!(pages = pages.len(), "loaded content stream");
    Ok(pages)
}

/// Reads pages in the shape named by `options`.
pub fn load_pages<R: Read>(reader: R, options: &SourceOptions) -> Result<Vec<Page>> {
    match options.format {
        InputFormat::Json => load_json_pages(reader),
        InputFormat::ContentStream => {
            load_content_stream(reader, options.page_width, options.page_height)
        }
    }
}
