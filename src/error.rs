use thiserror::Error;

use crate::config::{HOST_ENV, PLAYER_KEY_ENV};

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("must use -addr or set {}", HOST_ENV)]
    MissingAddr,

    #[error("must use -key or set {}", PLAYER_KEY_ENV)]
    MissingKey,

    #[error("invalid value {value:?} for action {action}: {reason}")]
    InvalidValue {
        action: String,
        value: String,
        reason: String,
    },

    #[error("error performing request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("error reading response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Non-success status; carries the server's trimmed response body.
    #[error("error: {0}")]
    Status(String),

    /// Create does not surface the response body, only the status.
    #[error("server did not create the player (status {0})")]
    CreateRejected(u16),

    #[error("error unmarshalling response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error marshalling {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<RemoteError>,
    },
}

impl RemoteError {
    pub fn context(self, context: &'static str) -> Self {
        RemoteError::Context {
            context,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_name_the_fallback_variable() {
        assert_eq!(
            RemoteError::MissingAddr.to_string(),
            "must use -addr or set TCH_ADDR"
        );
        assert_eq!(
            RemoteError::MissingKey.to_string(),
            "must use -key or set TCH_PLAYER_KEY"
        );
    }

    #[test]
    fn context_prefixes_the_message() {
        let err = RemoteError::Status("player not found".into()).context("error deleting key");
        assert_eq!(err.to_string(), "error deleting key: error: player not found");
    }
}
