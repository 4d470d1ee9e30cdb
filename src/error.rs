use thiserror::Error;

/// Errors surfaced by the matching pipeline.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] chroma_delta::ParseColorError),

    #[error("Catalog retrieval failed: {0}")]
    Retrieval(String),
}

impl MatchError {
    /// True for errors caused by the caller's input rather than the catalog
    /// backend. Transport layers map client errors to 4xx responses.
    pub fn is_client_error(&self) -> bool {
        matches!(self, MatchError::InvalidColor(_))
    }
}
