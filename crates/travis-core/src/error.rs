//! Error types for travis-activate.
//!
//! One error type covers the whole toolkit, with explicit variants for
//! transport, authentication, provider-reported and input validation failures.

use std::fmt;
use thiserror::Error;

/// The unified error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Credential errors (token missing or unreadable).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Provider errors (non-success status, malformed payloads).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (bad URL, bad pattern, bad page size).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Credential errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No token was configured anywhere.
    #[error("no API token found (looked up git config key '{key}')")]
    TokenMissing { key: String },

    /// The credential store could not be queried.
    #[error("failed to read credential store: {message}")]
    CredentialStore { message: String },
}

/// A non-success response from the provider, or a payload that breaks the
/// API contract.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Provider error type (`error_type`), if present.
    pub error: Option<String>,
    /// Provider error message (`error_message`), if present.
    pub message: Option<String>,
    /// Raw response body.
    pub body: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        } else if let Some(ref body) = self.body
            && !body.is_empty()
        {
            write!(f, ": {}", body)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
            body: None,
        }
    }

    /// Attach the raw response body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// A successful response whose payload violates the API contract.
    pub fn malformed(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, Some("malformed_response".to_string()), Some(message.into()))
    }

    /// Check if the provider rejected the credential.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.status == 403
            || self.error.as_deref() == Some("login_required")
            || self.error.as_deref() == Some("insufficient_access")
    }

    /// Check if the provider refused the call because of rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Slug pattern is not a valid regular expression.
    #[error("invalid slug pattern '{value}': {reason}")]
    Pattern { value: String, reason: String },

    /// Owner name is empty or contains a path separator.
    #[error("invalid owner '{value}': {reason}")]
    Owner { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
