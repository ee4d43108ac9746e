//! Contentful error types

use thiserror::Error;

/// Errors from the content service
#[derive(Debug, Error)]
pub enum ContentfulError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status, with the body's message when it has one
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Undecodable response body
    #[error("parse error: {0}")]
    Parse(String),

    /// `entry` is `<unknown>` when the id itself is missing
    #[error("entry {entry} is missing required field `{field}`")]
    MissingField { entry: String, field: String },

    /// Missing credentials
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ContentfulError {
    /// Whether this failure came from the transport rather than the payload
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }
}
