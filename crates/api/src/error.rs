use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid HTTP method '{method}': must be one of GET, OPTIONS, HEAD, POST, PUT, PATCH, DELETE")]
    InvalidMethod { method: String },

    #[error("API access token cannot be used as an HTTP header value")]
    InvalidToken,

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the error was raised before anything was sent.
    pub fn is_local(&self) -> bool {
        !matches!(self, ApiError::RequestFailed(_))
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            ApiError::InvalidMethod { .. } => {
                Some("Use one of GET, OPTIONS, HEAD, POST, PUT, PATCH or DELETE (upper-case)")
            }
            ApiError::InvalidToken => {
                Some("Check the token for whitespace or non-ASCII characters")
            }
            ApiError::InvalidUrl(_) => Some("Check the configured endpoint and the path slugs"),
            ApiError::RequestFailed(err) if err.is_timeout() => {
                Some("Check your network connection or raise the configured timeout")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
