//! Byte-string content parsing
//!
//! Some producers never emit placements: each row is a run of `<hex> Tj`
//! lines closed by `ET`. Positions come from stream order alone, so the
//! resulting coordinates are already grid coordinates.

use super::content::{is_end_text, is_hex_show_text};
use super::decode::decode_show_text;
use super::Format;
use crate::page::Page;
use crate::text::{PageLayout, TextElement};
use tracing::debug;

/// Parses one page of byte-string content.
pub fn parse_page_bytes(page: &Page) -> PageLayout {
    let mut layout = PageLayout::new(page, Format::Bytes);
    let (mut x, mut y) = (0i64, 0i64);

    for (lnum, line) in page.lines.iter().enumerate() {
        if is_end_text(line) {
            x = 0;
            y += 1;
        } else if is_hex_show_text(line) {
            match decode_show_text(line) {
                Ok(text) => {
                    let element = TextElement {
                        text_line: line.clone(),
                        ..TextElement::at_grid(x, y, text)
                    };
                    x = element.end_x();
                    layout.elements.push(element);
                }
                Err(e) => debug!(page = page.number, line = lnum, "{e}"),
            }
        }
    }

    layout
}

/// Parses every page in order.
pub fn parse_pages_bytes(pages: &[Page]) -> Vec<PageLayout> {
    pages.iter().map(parse_page_bytes).collect()
}
