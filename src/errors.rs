use std::fmt;

/// Failure kinds for a request to the user generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be read.
    Network(String),
    /// The body was not JSON of the expected shape.
    Decode(String),
    /// The service answered with a non-2xx status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder if it could not be read.
        body: String,
    },
    /// The HTTP client could not be built.
    Configuration(String),
}

impl ClientError {
    /// Status code for `HttpStatus`, `None` for the other kinds.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ClientError::HttpStatus { status, body } => {
                write!(f, "Service returned {}: {}", status, body)
            }
            ClientError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    /// Converts a `reqwest::Error` into a `ClientError`.
    ///
    /// Builder errors come from an unusable URL and are reported as network
    /// failures, since the request never left the process.
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
