//! Structured error types for gridhead.

/// All errors that can occur while building or exporting grids.
#[derive(Debug, thiserror::Error)]
pub enum GridheadError {
    /// XML emission error from quick-xml.
    #[error("XML writing: {0}")]
    Xml(#[from] quick_xml::Error),

    /// ZIP archive error while packaging XLSX output.
    #[error("ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A requested range lies outside the grid.
    #[error("Range out of bounds: {0}")]
    Range(String),

    /// Export failure not covered by a more specific variant.
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridheadError>;

impl From<std::fmt::Error> for GridheadError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Export(e.to_string())
    }
}
