//! Blocking HTTP transport over reqwest
//!
//! Implements the [`Transport`] trait with a blocking reqwest client:
//! basic authentication on every request, rustls certificate and hostname
//! verification, and connection-level failures folded into a status-0
//! response.

use std::collections::HashMap;

use reqwest::blocking::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, TransportError};
use crate::traits::{Body, Request, Response, Transport};

/// Production HTTP transport.
///
/// Fully synchronous: every send blocks the calling thread until the
/// exchange completes or fails. Timeouts, redirect handling, and connection
/// reuse are left at reqwest's defaults; TLS verification is always on and
/// cannot be disabled through this type.
pub struct HttpTransport {
    client: ReqwestClient,
    username: SecretString,
    password: SecretString,
}

impl HttpTransport {
    /// Create a new HTTP transport with no credentials stored yet.
    pub fn new() -> Result<Self> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(Self {
            client,
            username: SecretString::new(String::new().into_boxed_str()),
            password: SecretString::new(String::new().into_boxed_str()),
        })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new().expect("failed to create HTTP transport with defaults")
    }
}

impl Transport for HttpTransport {
    fn set_basic_auth(&mut self, username: &str, password: &str) {
        self.username = SecretString::new(username.to_owned().into_boxed_str());
        self.password = SecretString::new(password.to_owned().into_boxed_str());
    }

    fn send(&self, request: &Request) -> Response {
        match self.execute(request) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(url = %request.url, error = %err, "connection-level failure");
                Response::connection_failure()
            }
        }
    }
}

impl HttpTransport {
    fn execute(&self, request: &Request) -> Result<Response> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            TransportError::InvalidRequest(format!("unsupported HTTP method: {}", request.method))
        })?;

        tracing::debug!(method = %method, url = %request.url, "sending request");

        let mut req = self.client.request(method, request.url.as_str());

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        req = match &request.body {
            Body::Raw(text) if text.is_empty() => req,
            Body::Raw(text) => req.body(text.clone()),
            Body::Form(fields) => {
                let mut form = reqwest::blocking::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name.clone(), value.clone());
                }
                req.multipart(form)
            }
        };

        // Basic auth is applied unconditionally; until credentials are set
        // the service just sees the empty pair, which matches what the
        // unauthenticated endpoints expect.
        req = req.basic_auth(self.username.expose_secret(), Some(self.password.expose_secret()));

        let response = req.send().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else if e.is_connect() {
                TransportError::Connection(e.to_string())
            } else {
                TransportError::Http(e.to_string())
            }
        })?;

        let status = response.status().as_u16();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let body = response
            .bytes()
            .map_err(|e| TransportError::Http(e.to_string()))?;
        let body = String::from_utf8_lossy(&body).into_owned();

        tracing::debug!(status, url = %request.url, "request completed");
        Ok(Response::new(status, headers, body))
    }
}
