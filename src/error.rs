use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The API answered with a non-success status.
    #[error("API Error: {status} {body}")]
    Transport { status: u16, body: String },

    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Neither the API nor session storage knows the rocket.
    ///
    /// `cause` keeps the API failure for diagnostics; it never changes the
    /// message.
    #[error("Rocket not found in API or local storage")]
    NotFound {
        id: String,
        #[source]
        cause: Option<Box<CatalogError>>,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    /// HTTP status of a [`CatalogError::Transport`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
