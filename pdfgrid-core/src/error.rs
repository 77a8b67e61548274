use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid page dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid page size for page {page}: {width}x{height}")]
    InvalidPageSize { page: u32, width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
