//! Error Types

use thiserror::Error;

/// Raised while attaching handlers to delete controls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("delete control has no resource locator")]
    MissingLocator,
    #[error("malformed resource locator `{0}`")]
    MalformedLocator(String),
    /// Wraps a locator error with a description of the offending element.
    #[error("delete control {control}: {source}")]
    Control {
        control: String,
        #[source]
        source: Box<BindError>,
    },
    #[error("no document available")]
    NoDocument,
    #[error("dom error: {0}")]
    Dom(String),
}

impl BindError {
    pub fn for_control(self, control: impl Into<String>) -> Self {
        BindError::Control {
            control: control.into(),
            source: Box::new(self),
        }
    }
}

/// Raised by a [`DeleteTransport`](crate::transport::DeleteTransport) when no
/// response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("no window available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    TimedOut(u32),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
