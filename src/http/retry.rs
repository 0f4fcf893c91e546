//! Retry policy for artifact requests.

use reqwest::StatusCode;

/// Maximum number of attempts for a network operation.
pub const MAX_RETRIES: usize = 3;

/// Delay between retry attempts in milliseconds.
pub const RETRY_DELAY_MS: u64 = 1000;

/// Errors that should not be retried.
#[derive(Debug)]
pub enum NonRetryableError {
    /// The request could not be built (malformed URL, bad header)
    InvalidRequest(String),
    /// Redirect loop or too many redirects
    Redirect(String),
}

impl std::fmt::Display for NonRetryableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NonRetryableError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            NonRetryableError::Redirect(msg) => write!(f, "Redirect error: {}", msg),
        }
    }
}

impl std::error::Error for NonRetryableError {}

/// Error for a 5xx answer, kept separate so callers can report the status.
#[derive(Debug)]
pub struct ServerError(pub StatusCode);

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Server error: HTTP {}", self.0.as_u16())
    }
}

impl std::error::Error for ServerError {}

/// Classifies a transport error as retryable or not.
/// Returns Ok(()) if the error is retryable.
pub fn classify_error(error: &reqwest::Error) -> Result<(), NonRetryableError> {
    if error.is_builder() {
        return Err(NonRetryableError::InvalidRequest(error.to_string()));
    }
    if error.is_redirect() {
        return Err(NonRetryableError::Redirect(error.to_string()));
    }

    // Connection errors, timeouts, etc. are retryable
    Ok(())
}

/// Converts a transport error into an anyhow error that the retry loop can
/// recognise as final when it is not worth retrying.
pub fn check_retryable(error: reqwest::Error) -> anyhow::Error {
    match classify_error(&error) {
        Ok(()) => anyhow::Error::from(error),
        Err(non_retryable) => anyhow::Error::from(non_retryable),
    }
}
