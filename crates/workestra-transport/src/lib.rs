//! HTTP transport abstraction layer for the Workestra SDK
//!
//! Provides the request/response value types and a trait-based transport
//! abstraction used by the Workestra client. The production transport sends
//! blocking HTTPS requests with basic authentication; tests substitute a
//! scripted double behind the same trait.
//!
//! # Architecture
//!
//! - **Transport trait**: interface for anything that can send one request
//! - **HTTP transport**: blocking client via reqwest with rustls
//! - **Header parsing**: raw header-block parsing with legacy line unfolding
//! - **Error handling**: connection-level failures are encoded as a
//!   `Response` with status 0, never raised to the caller

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod headers;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use http::HttpTransport;
pub use traits::{Body, Content, Request, Response, Transport};
