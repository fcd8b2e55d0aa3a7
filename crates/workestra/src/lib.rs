//! # Workestra SDK
//!
//! Rust client for the Workestra task/notification API supporting:
//! - API key and basic authentication
//! - Login to obtain an API key for later requests
//! - Listing recent notifications
//!
//! All operations are blocking: each call returns once the network exchange
//! completes or fails. Network and HTTP failures are never raised as errors;
//! they are reported through the returned [`Response`], with status 0
//! reserved for connection-level failures.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use workestra::Client;
//!
//! let mut client = Client::new();
//! client.set_api_key("your-api-key");
//!
//! let response = client.list_notifications();
//! if response.is_error() {
//!     eprintln!("lookup failed: {:?}", response.error_message());
//! } else {
//!     println!("{:?}", response.content_json());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use workestra_transport::{Body, Content, Request, Response, Transport};

// Module declarations
pub mod client;

/// The transport layer, re-exported for direct use and for test doubles.
pub use workestra_transport as transport;

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default production API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.workestra.co/api/v1";

/// Fixed placeholder password paired with an API key in basic
/// authentication. A protocol convention of the service, not a security
/// mechanism.
pub const API_KEY_PASSWORD: &str = "w";
