//! Transport error types

use thiserror::Error;

/// Result type for transport-internal operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur while performing an HTTP exchange.
///
/// These are internal to the transport: [`Transport::send`] converts every
/// one of them into a status-0 [`Response`] instead of returning an `Err`,
/// so callers only ever see the response object.
///
/// [`Transport::send`]: crate::traits::Transport::send
/// [`Response`]: crate::traits::Response
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP-level error (malformed URL, protocol error, body read failure)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Connection could not be established (DNS, refused, TLS)
    #[error("connection error: {0}")]
    Connection(String),

    /// The exchange timed out before a response was received
    #[error("request timed out")]
    Timeout,

    /// The request could not be turned into a wire request
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
