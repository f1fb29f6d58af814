#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("No price records for period {period}")]
    EmptyResultSet { period: String },

    #[error("Invalid divisor: previous average is zero")]
    InvalidDivisor,

    #[cfg(feature = "duckdb")]
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PriceError {
    pub(crate) fn empty(period: &str) -> Self {
        PriceError::EmptyResultSet {
            period: period.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PriceError>;
