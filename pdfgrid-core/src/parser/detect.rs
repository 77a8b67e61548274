//! Content dialect detection

use super::content::is_hex_show_text;
use crate::page::Page;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content dialect of a set of pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `a b c d e f Tm` placements followed by `Tj`/`TJ`
    Positioned,
    /// `<hex> Tj` runs laid out by stream order, rows split at `ET`
    Bytes,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Positioned => write!(f, "positioned"),
            Format::Bytes => write!(f, "bytes"),
        }
    }
}

/// Picks the parser for a set of pages.
///
/// A single hex show-text line anywhere is enough to switch every page to
/// the byte-string dialect.
pub fn detect_format(pages: &[Page]) -> Format {
    let has_hex = pages
        .iter()
        .flat_map(|page| page.lines.iter())
        .any(|line| is_hex_show_text(line));

    if has_hex {
        Format::Bytes
    } else {
        Format::Positioned
    }
}
