use thiserror::Error;

/// Failure to write to the session store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("could not write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Every way a client operation can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL for the service is missing. Raised before any request.
    #[error("API base URL is not configured")]
    Configuration,

    /// The completion endpoint answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("registration failed: {message}")]
    Registration {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("login failed: {message}")]
    Login {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A browser exception without a recognizable error type.
    #[error("unexpected error: {0}")]
    Unknown(#[from] StoreError),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
