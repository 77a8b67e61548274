//! Recovered page layout
//!
//! A [`PageLayout`] is the per-page aggregate produced by either parser.
//! Elements carry page-space coordinates (`x0`, `y0`) and grid coordinates
//! (`x`, `y`); byte-string pages fill the grid coordinates directly while
//! placement-driven pages get them from the transformer.

use crate::page::Page;
use crate::parser::Format;
use serde::{Deserialize, Serialize};

fn is_zero(v: &i64) -> bool {
    *v == 0
}

/// One recovered run of visible text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    /// Grid column
    #[serde(default, skip_serializing_if = "is_zero")]
    pub x: i64,
    /// Grid row
    #[serde(default, skip_serializing_if = "is_zero")]
    pub y: i64,
    /// Page-space x of the placement
    pub x0: f64,
    /// Page-space y of the placement
    pub y0: f64,
    pub text: String,
    /// Placement line the position came from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub xy_line: String,
    /// Show-text line the text came from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text_line: String,
}

impl TextElement {
    /// Element positioned in page space, awaiting transformation.
    pub fn at_page(x0: f64, y0: f64, text: impl Into<String>) -> Self {
        Self {
            x0,
            y0,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Element already positioned on the output grid.
    pub fn at_grid(x: i64, y: i64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Text length in grid cells.
    pub fn len(&self) -> i64 {
        self.text.chars().count() as i64
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Grid column just past the end of the text.
    pub fn end_x(&self) -> i64 {
        self.x.saturating_add(self.len())
    }
}

/// Text elements recovered from one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub number: u32,
    /// Largest placement x seen on the page
    pub mx: f64,
    /// Largest placement y seen on the page
    pub my: f64,
    pub elements: Vec<TextElement>,
    #[serde(skip)]
    pub format: Format,
    #[serde(skip)]
    pub page_width: f64,
    #[serde(skip)]
    pub page_height: f64,
}

impl PageLayout {
    /// Empty layout for `page`, produced by a parser of the given format.
    pub fn new(page: &Page, format: Format) -> Self {
        Self {
            number: page.number,
            mx: 0.0,
            my: 0.0,
            elements: Vec::new(),
            format,
            page_width: page.width,
            page_height: page.height,
        }
    }

    /// Whether coordinates still need mapping onto the grid.
    pub fn needs_transform(&self) -> bool {
        self.format == Format::Positioned
    }

    /// Sorts elements top to bottom, then left to right, keeping the parse
    /// order of elements sharing a cell.
    pub fn sort(&mut self) {
        self.elements.sort_by_key(|e| (e.y, e.x));
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_element_constructors() {
        let placed = TextElement::at_page(10.0, 20.0, "Hello");
        assert_eq!((placed.x0, placed.y0), (10.0, 20.0));
        assert_eq!((placed.x, placed.y), (0, 0));

        let gridded = TextElement::at_grid(3, 4, "World");
        assert_eq!((gridded.x, gridded.y), (3, 4));
        assert_eq!(gridded.len(), 5);
        assert_eq!(gridded.end_x(), 8);
    }

    #[test]
    fn test_text_element_json_omits_zero_fields() {
        let element = TextElement::at_page(10.0, 20.0, "Hello");
        let json = serde_json::to_string(&element).unwrap();
        assert_eq!(json, r#"{"x0":10.0,"y0":20.0,"text":"Hello"}"#);

        let element = TextElement {
            x: 17,
            y: 2,
            xy_line: "1 0 0 1 10 20 Tm".into(),
            ..TextElement::at_page(10.0, 20.0, "Hello")
        };
        let json = serde_json::to_string(&element).unwrap();
        assert_eq!(
            json,
            r#"{"x":17,"y":2,"x0":10.0,"y0":20.0,"text":"Hello","xy_line":"1 0 0 1 10 20 Tm"}"#
        );
    }

    #[test]
    fn test_page_layout_sort_is_stable() {
        let page = Page::letter(1, Vec::new());
        let mut layout = PageLayout::new(&page, Format::Positioned);
        layout.elements = vec![
            TextElement::at_grid(5, 1, "b"),
            TextElement::at_grid(1, 2, "c"),
            TextElement::at_grid(5, 1, "b2"),
            TextElement::at_grid(0, 1, "a"),
        ];
        layout.sort();
        let texts: Vec<&str> = layout.elements.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "b2", "c"]);
    }

    #[test]
    fn test_page_layout_json_shape() {
        let page = Page::letter(7, Vec::new());
        let layout = PageLayout::new(&page, Format::Bytes);
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(json, r#"{"number":7,"mx":0.0,"my":0.0,"elements":[]}"#);
        assert!(!layout.needs_transform());
    }
}
