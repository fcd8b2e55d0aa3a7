//! Main client implementation for the Workestra API

use serde::Deserialize;
use workestra_transport::{HttpTransport, Request, Response, Transport};

use crate::{API_KEY_PASSWORD, DEFAULT_BASE_URL};

/// Client for the Workestra task/notification API.
///
/// Holds one [`Transport`] (the production HTTP transport by default,
/// injectable for testing) and a base URL, and exposes the domain
/// operations by building requests and delegating to the transport.
///
/// Each client owns its own credential state; sharing one instance across
/// threads requires external synchronization.
///
/// # Example
///
/// ```rust,no_run
/// use workestra::Client;
///
/// let mut client = Client::new();
/// client.set_api_key("your-api-key");
/// let notifications = client.list_notifications();
/// ```
pub struct Client {
    transport: Box<dyn Transport>,
    base_url: String,
}

impl Client {
    /// Create a client with the production transport and base URL.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Set the API key to use on all subsequent requests.
    ///
    /// Equivalent to basic authentication with the key as username and the
    /// service's fixed placeholder password.
    pub fn set_api_key(&mut self, key: &str) {
        self.transport.set_basic_auth(key, API_KEY_PASSWORD);
    }

    /// Set the username and password used in HTTP basic authentication.
    pub fn set_basic_auth(&mut self, username: &str, password: &str) {
        self.transport.set_basic_auth(username, password);
    }

    /// Request an API key for use in later requests.
    ///
    /// Posts the credentials to the authenticate endpoint and returns the
    /// raw response; a success body is JSON of the form `{"key": "..."}`.
    /// The call goes out with whatever credentials the transport currently
    /// holds (typically none, since it precedes authentication). To adopt
    /// the key, parse the body and call [`set_api_key`](Self::set_api_key),
    /// or use [`login`](Self::login) to do both in one step.
    pub fn request_api_key(&self, email: &str, password: &str) -> Response {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("email", email)
            .append_pair("password", password)
            .finish();

        let request = Request::new("POST", format!("{}/authenticate", self.base_url))
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_body(body);

        tracing::debug!("requesting api key");
        self.transport.send(&request)
    }

    /// Obtain an API key and adopt it for all subsequent requests.
    ///
    /// Returns false on any failure without touching stored credentials.
    /// All failure modes collapse into the boolean by design; call
    /// [`request_api_key`](Self::request_api_key) directly to distinguish a
    /// network failure from bad credentials or a malformed body.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let response = self.request_api_key(email, password);
        if response.is_error() {
            tracing::debug!(status = response.status(), "login failed");
            return false;
        }

        let Some(grant) = response.json::<ApiKeyGrant>() else {
            tracing::debug!("authenticate succeeded but returned no usable key");
            return false;
        };

        self.set_api_key(&grant.key);
        true
    }

    /// Fetch the list of recent notifications.
    ///
    /// The success body is JSON; its record structure is owned by the
    /// service and left opaque here.
    pub fn list_notifications(&self) -> Response {
        let request = Request::new("GET", format!("{}/notifications", self.base_url));
        self.transport.send(&request)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Success body of the authenticate endpoint.
#[derive(Debug, Deserialize)]
struct ApiKeyGrant {
    key: String,
}

/// Builder for creating a configured [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    transport: Option<Box<dyn Transport>>,
    base_url: Option<String>,
}

impl ClientBuilder {
    /// Use a custom transport instead of the production HTTP transport.
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the base URL (useful for staging environments).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Client {
        Client {
            transport: self
                .transport
                .unwrap_or_else(|| Box::new(HttpTransport::default())),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}
