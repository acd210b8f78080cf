/// Custom error type for the merge pipeline
///
/// Using `thiserror` crate for automatic `Error` trait implementation and `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// I/O errors (reading inputs, writing the merged file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML parsing errors (strict import mode only)
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
}

/// Result type alias using MergeError
pub type Result<T> = std::result::Result<T, MergeError>;

impl From<tl::ParseError> for MergeError {
    fn from(err: tl::ParseError) -> Self {
        MergeError::HtmlParse(err.to_string())
    }
}
