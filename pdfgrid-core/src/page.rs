use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// A single decoded page handed over by the document engine.
///
/// Pages carry their size in page-space units (points, 1/72 inch) and the
/// content stream split into lines. The raw `text` blob is only populated
/// by engines that skip line splitting.
///
/// # Example
///
/// ```rust
/// use pdfgrid::Page;
///
/// let page = Page::letter(1, vec!["1 0 0 1 72 700 Tm".into(), "(Hi) Tj".into()]);
/// assert_eq!(page.width, 612.0);
/// assert_eq!(page.lines.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    #[serde(rename = "page")]
    pub number: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl Page {
    /// Creates a new page with the given number, size and content lines.
    pub fn new(number: u32, width: f64, height: f64, lines: Vec<String>) -> Self {
        Self {
            width,
            height,
            number,
            lines,
            text: String::new(),
        }
    }

    /// Creates a new US Letter page (612 x 792 points).
    pub fn letter(number: u32, lines: Vec<String>) -> Self {
        Self::new(number, 612.0, 792.0, lines)
    }

    /// Creates a new A4 page (595 x 842 points).
    pub fn a4(number: u32, lines: Vec<String>) -> Self {
        Self::new(number, 595.0, 842.0, lines)
    }

    /// Rejects pages whose dimensions cannot be mapped onto a grid.
    pub fn validate(&self) -> Result<()> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(self.width) && usable(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidPageSize {
                page: self.number,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the page content as one blob, joining lines when needed.
    pub fn content(&self) -> String {
        if self.lines.is_empty() {
            self.text.clone()
        } else {
            let mut content = self.lines.join("\n");
            content.push('\n');
            content
        }
    }
}
