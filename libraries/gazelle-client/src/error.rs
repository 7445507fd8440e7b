//! Error types for the Gazelle tracker client.

use thiserror::Error;

/// Errors that can occur when interacting with a Gazelle tracker.
#[derive(Error, Debug)]
pub enum TrackerClientError {
    /// Invalid tracker base URL
    #[error("Invalid tracker URL: {0}")]
    InvalidUrl(String),

    /// The cookie-aware HTTP transport could not be constructed
    #[error("Failed to initialize HTTP transport: {0}")]
    TransportInit(#[source] reqwest::Error),

    /// HTTP request failed (DNS, connection, timeout)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Operation attempted before a successful login
    #[error("Not logged in")]
    NotLoggedIn,

    /// The login POST did not land on the index page
    #[error("Login failed: landed on {location}")]
    LoginFailed { location: String },

    /// Server answered with a non-success HTTP status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body is not valid JSON or does not match the expected shape.
    /// Carries the raw body for diagnosis.
    #[error("Failed to decode response: {message}")]
    Decode { message: String, body: String },

    /// The tracker reported a failure in the response envelope
    #[error("'{action}' request failed: {message}")]
    Api { action: String, message: String },
}

/// Result type for tracker client operations.
pub type Result<T> = std::result::Result<T, TrackerClientError>;
