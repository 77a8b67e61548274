//! Placement-driven content parsing
//!
//! Walks a page's lines pairing each `Tm` placement with the show-text
//! line right after it. Any line other than a placement or a font
//! selection resets the position, so a show-text line without a fresh
//! placement lands at the page origin.

use super::content::{classify, parse_placement, LineKind};
use super::decode::decode_show_text;
use super::Format;
use crate::page::Page;
use crate::text::{PageLayout, TextElement};
use std::collections::BTreeMap;
use tracing::debug;

/// Spatial index key: page-space position rounded to 1/1000 unit.
type CellKey = (i64, i64);

fn cell_key(x: f64, y: f64) -> CellKey {
    ((y * 1000.0).round() as i64, (x * 1000.0).round() as i64)
}

/// Parser state between lines
#[derive(Default)]
struct PlacementState {
    x: f64,
    y: f64,
    xy_line: String,
    text_line: String,
}

impl PlacementState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parses one page of placement-driven content.
///
/// Elements landing on the same page-space position replace each other;
/// the last one in stream order wins. The returned elements are ordered by
/// page-space position and still need [`crate::text::transform_pages`].
pub fn parse_page(page: &Page) -> PageLayout {
    let mut layout = PageLayout::new(page, Format::Positioned);
    let mut index: BTreeMap<CellKey, TextElement> = BTreeMap::new();
    let mut state = PlacementState::default();

    for (lnum, line) in page.lines.iter().enumerate() {
        match classify(line) {
            LineKind::Placement => {
                state.xy_line = line.clone();
                match parse_placement(line) {
                    Ok((x, y)) => {
                        state.x = x;
                        state.y = y;
                        layout.mx = layout.mx.max(x);
                        layout.my = layout.my.max(y);
                    }
                    Err(e) => debug!(page = page.number, line = lnum, "{e}"),
                }
                continue;
            }
            LineKind::ShowText => {
                state.text_line = line.clone();
                match decode_show_text(line) {
                    Ok(text) => {
                        let element = TextElement {
                            xy_line: state.xy_line.clone(),
                            text_line: state.text_line.clone(),
                            ..TextElement::at_page(state.x, state.y, text.replace('\\', ""))
                        };
                        index.insert(cell_key(state.x, state.y), element);
                    }
                    Err(e) => debug!(page = page.number, line = lnum, "{e}"),
                }
            }
            LineKind::Ignorable => {
                debug!(page = page.number, "skipping line {lnum:05}: {line:?}");
                continue;
            }
            LineKind::EndText | LineKind::Unclassified => {}
        }
        state.reset();
    }

    layout.elements = index.into_values().collect();
    layout
}

/// Parses every page in order.
pub fn parse_pages(pages: &[Page]) -> Vec<PageLayout> {
    pages.iter().map(parse_page).collect()
}
