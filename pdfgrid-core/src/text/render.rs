//! Grid rendering
//!
//! Writes sorted, transformed pages either as an ASCII-art grid or as JSON
//! records.

use super::PageLayout;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Output grid options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Grid width in characters
    pub width: u32,
    /// Grid height in rows
    pub height: u32,
    /// Pull text left so it never runs past `width`
    pub fit: bool,
    /// Emit blank rows for skipped grid rows
    pub vertical_space: bool,
    /// Prefix rows with the page number and close them with `$`
    pub verbose: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 120,
            fit: false,
            vertical_space: false,
            verbose: false,
        }
    }
}

fn pad<W: Write>(out: &mut W, n: i64) -> io::Result<()> {
    if n > 0 {
        write!(out, "{:width$}", "", width = n as usize)?;
    }
    Ok(())
}

impl RenderConfig {
    /// Renders pages as text, one block per page.
    pub fn render<W: Write>(&self, pages: &[PageLayout], out: &mut W) -> io::Result<()> {
        for page in pages {
            self.render_page(page, out)?;
        }
        Ok(())
    }

    /// Renders pages into a string.
    pub fn render_to_string(&self, pages: &[PageLayout]) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(pages, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    fn render_page<W: Write>(&self, page: &PageLayout, out: &mut W) -> io::Result<()> {
        let width = i64::from(self.width);
        let (prefix, suffix) = if self.verbose {
            (format!("p{:03}: ", page.number), "$")
        } else {
            (String::new(), "")
        };

        let (mut x, mut y) = (0i64, 0i64);
        for element in &page.elements {
            if element.y > y {
                pad(out, width.saturating_sub(x))?;
                writeln!(out, "{suffix}")?;
                if self.vertical_space {
                    for _ in 0..element.y.saturating_sub(y).saturating_sub(1) {
                        write!(out, "{prefix}")?;
                        pad(out, width)?;
                        writeln!(out, "{suffix}")?;
                    }
                }
                x = 0;
            }
            if x == 0 && self.verbose {
                write!(out, "{prefix}")?;
            }
            pad(out, element.x.saturating_sub(x))?;
            write!(out, "{}", element.text)?;
            x = element.end_x();
            y = element.y;
        }
        writeln!(out)
    }
}

/// Writes records as one JSON document followed by a newline.
pub fn write_records<T, W>(records: &T, out: &mut W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_json::to_writer(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}
