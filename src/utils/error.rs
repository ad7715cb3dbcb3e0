use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Request timeout")]
    Timeout,

    #[error("Network error - please check your connection")]
    Network,

    #[error("Resource not found")]
    NotFound,

    #[error("Server error occurred")]
    Server,

    /// Unclassified transport failure, re-raised unchanged.
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status outside the classified set that reqwest does not treat
    /// as an error (redirect-class responses).
    #[error("Unexpected HTTP status: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

impl PortfolioError {
    /// Classifies a failure where no HTTP response came back at all.
    /// Precedence: timeout first, then anything without a response counts as
    /// a network failure; errors that somehow carry a status pass through.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.status().is_none() {
            Self::Network
        } else {
            Self::Transport(err)
        }
    }

    /// True for the classified taxonomy values; false for passthrough errors.
    pub fn is_classified(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Network | Self::NotFound | Self::Server
        )
    }
}
