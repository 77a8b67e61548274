//! Show-text payload decoding
//!
//! Only 7-bit ASCII payloads are accepted. Font encodings are not modeled,
//! so a run containing anything wider is dropped as a whole rather than
//! guessed at character by character.

use super::content::{TEXT_ARRAY, TEXT_HEX, TEXT_LITERAL};
use super::{LineError, LineResult};

/// Returns `s` unchanged when it is pure ASCII, otherwise an empty string.
pub fn valid_ascii(s: &str) -> &str {
    if s.is_ascii() {
        s
    } else {
        ""
    }
}

/// Collects the characters found inside unescaped parentheses.
///
/// Kerning adjustments between runs (`[(He) -20 (llo)]`) fall outside any
/// parenthesis and are dropped.
pub fn literal_text(run: &str) -> String {
    let mut text = String::with_capacity(run.len());
    let mut inside = false;
    let mut previous = '\0';
    for c in run.chars() {
        match c {
            '(' if previous != '\\' => inside = true,
            ')' if previous != '\\' => inside = false,
            _ if inside => text.push(c),
            _ => {}
        }
        previous = c;
    }
    text
}

/// Decodes the payload of a show-text line into plain text.
///
/// Escape backslashes are kept; the positioned parser drops them when it
/// records an element.
pub fn decode_show_text(line: &str) -> LineResult<String> {
    let literal = TEXT_ARRAY
        .captures(line)
        .or_else(|| TEXT_LITERAL.captures(line));

    if let Some(captures) = literal {
        let run = valid_ascii(&captures[1]).trim();
        if !run.is_empty() {
            let text = literal_text(run);
            if !text.is_empty() {
                return Ok(text);
            }
        }
    } else if let Some(captures) = TEXT_HEX.captures(line) {
        let bytes = hex::decode(&captures[1])?;
        if bytes.is_ascii() {
            let text: String = bytes.into_iter().map(char::from).collect();
            if !text.is_empty() {
                return Ok(text);
            }
        }
    }

    Err(LineError::NoPayload(line.to_string()))
}
