//! Content Line Parser Module
//!
//! Turns the content-stream lines of a page into positioned text elements.
//! Two dialects are understood: placement-driven streams (`Tm` followed by
//! `Tj`/`TJ`) and byte-string streams (`<hex> Tj` runs separated by `ET`).

pub mod bytes;
pub mod content;
pub mod decode;
pub mod detect;
pub mod positioned;

pub use self::bytes::{parse_page_bytes, parse_pages_bytes};
pub use self::content::{classify, LineKind};
pub use self::decode::{decode_show_text, literal_text, valid_ascii};
pub use self::detect::{detect_format, Format};
pub use self::positioned::{parse_page, parse_pages};

/// Result type for single-line parsing
pub type LineResult<T> = Result<T, LineError>;

/// Errors local to one content line.
///
/// These never abort a page: parsers log them and move on to the next line.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("parseposition: line has {0} fields, expected at least 7")]
    MalformedPlacement(usize),

    #[error("parseposition: not a position line {0:?}")]
    NotPlacement(String),

    #[error("parseposition: invalid coordinate {0:?}")]
    InvalidCoordinate(String),

    #[error("parsetext: hex decode {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("parsetext: no matches for {0:?}")]
    NoPayload(String),
}
