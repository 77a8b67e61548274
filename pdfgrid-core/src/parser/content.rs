//! Content Line Classifier
//!
//! Assigns each content-stream line one operator role. Only the operators
//! needed for layout are recognized; everything else is `Unclassified`.

use super::{LineError, LineResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEMENT: Regex = Regex::new(r".* Tm$").unwrap();
    static ref SHOW_TEXT: Regex = Regex::new(r".*T[Jj]$").unwrap();
    static ref FONT_SELECT: Regex = Regex::new(r".* Tf\s*$").unwrap();
    static ref END_TEXT: Regex = Regex::new(r"\bET\b").unwrap();
    pub(super) static ref TEXT_ARRAY: Regex =
        Regex::new(r"^\s*\[(\(.+\))\]\s+TJ\s*$").unwrap();
    pub(super) static ref TEXT_LITERAL: Regex = Regex::new(r"^\s*(\(.+\))\s*Tj\s*$").unwrap();
    pub(super) static ref TEXT_HEX: Regex = Regex::new(r"^\s*<([0-9A-Fa-f]+)>\s*Tj\s*$").unwrap();
}

/// Operator role of a single content line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `a b c d e f Tm`
    Placement,
    /// `(..) Tj`, `[..] TJ` or `<..> Tj`
    ShowText,
    /// `/F1 12 Tf`, skipped without breaking placement
    Ignorable,
    /// `ET`, only meaningful to byte-string streams
    EndText,
    Unclassified,
}

/// Classifies a content line.
///
/// Precedence follows the positioned parser: placement, show-text,
/// font selection, end-of-text.
pub fn classify(line: &str) -> LineKind {
    if is_placement(line) {
        LineKind::Placement
    } else if is_show_text(line) {
        LineKind::ShowText
    } else if is_ignorable(line) {
        LineKind::Ignorable
    } else if is_end_text(line) {
        LineKind::EndText
    } else {
        LineKind::Unclassified
    }
}

/// True for a text matrix line: `1 0 0 1 72 700 Tm`
pub fn is_placement(line: &str) -> bool {
    PLACEMENT.is_match(line)
}

/// True for a line ending in `Tj` or `TJ`
pub fn is_show_text(line: &str) -> bool {
    SHOW_TEXT.is_match(line)
}

/// True for a font selection line: `/F1 12 Tf`
pub fn is_ignorable(line: &str) -> bool {
    FONT_SELECT.is_match(line)
}

/// True when the line holds a standalone `ET`
pub fn is_end_text(line: &str) -> bool {
    END_TEXT.is_match(line)
}

/// True for the byte-string dialect: `<48656C6C6F> Tj`
pub fn is_hex_show_text(line: &str) -> bool {
    TEXT_HEX.is_match(line)
}

/// Reads the translation components of a `Tm` line.
pub fn parse_placement(line: &str) -> LineResult<(f64, f64)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 7 {
        return Err(LineError::MalformedPlacement(parts.len()));
    }
    if parts[6] != "Tm" {
        return Err(LineError::NotPlacement(line.to_string()));
    }
    let coordinate = |field: &str| {
        field
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LineError::InvalidCoordinate(field.to_string()))
    };
    Ok((coordinate(parts[4])?, coordinate(parts[5])?))
}
