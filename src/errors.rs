use std::fmt;

/// Library-specific error types.
#[derive(Debug, Clone)]
pub enum Error {
    /// No API credential could be resolved at client construction.
    Credentials(String),
    /// Locally rejected input (malformed identification, bad beneficiary split).
    Validation(String),
    /// A quote request is missing required fields; carries the missing keys.
    InsufficientData(Vec<String>),
    /// A lookup yielded no match (e.g. unknown gadget model).
    NotFound(String),
    /// The API answered with a non-success status.
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body as returned by the API.
        body: String,
    },
    /// The request exceeded the client timeout.
    Timeout(String),
    /// The request could not be sent or the response could not be read.
    Transport(String),
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<Error>,
        /// Additional context message.
        context: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Credentials(msg) => write!(f, "Credentials error: {}", msg),
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::InsufficientData(fields) => {
                write!(f, "Insufficient data, missing fields: {}", fields.join(", "))
            }
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Api { status, body } => write!(f, "API returned status {}: {}", status, body),
            Error::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            Error::Transport(msg) => write!(f, "Transport error: {}", msg),
            Error::WithContext { source, context } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    /// Converts a `reqwest::Error` into an `Error`, keeping timeouts distinct.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `Error` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, Error>;

    /// Add context lazily (only evaluated on error).
    #[allow(dead_code)]
    fn with_context<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn context(self, context: impl Into<String>) -> Result<T, Error> {
        self.map_err(|e| Error::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::WithContext {
            source: Box::new(e),
            context: f(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_carries_status_and_body() {
        let err = Error::Api {
            status: 404,
            body: "{\"error\": \"not found\"}".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn context_wraps_source() {
        let err: Result<(), Error> = Err(Error::NotFound("iPhone 99".to_string()));
        let wrapped = err.context("looking up gadget model").unwrap_err();
        let text = wrapped.to_string();
        assert!(text.starts_with("looking up gadget model"));
        assert!(text.contains("iPhone 99"));
    }
}
