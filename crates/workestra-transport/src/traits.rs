//! Transport trait and request/response value types
//!
//! Defines the generic [`Transport`] trait implemented by the production
//! HTTP transport and by test doubles, together with the [`Request`] and
//! [`Response`] value objects exchanged through it.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::headers::parse_header_block;

/// Body placeholder used when no HTTP response was received at all.
pub const CONNECTION_FAILURE_BODY: &str = "Connection error";

/// Response header carrying a human-readable error description.
///
/// The triple-s spelling is what the live service sends; it must not be
/// "corrected" here or the header will never match.
pub const ERROR_MESSAGE_HEADER: &str = "X-Workestra-Error-Messsage";

/// Request body payload.
///
/// Most requests carry a raw text body (possibly empty); file-style uploads
/// carry named form fields sent as `multipart/form-data`. This is the only
/// branching behavior in the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Raw text sent as-is.
    Raw(String),
    /// Named fields sent as a multipart form.
    Form(Vec<(String, String)>),
}

impl Default for Body {
    fn default() -> Self {
        Body::Raw(String::new())
    }
}

/// One outbound HTTP call.
///
/// A plain data holder: nothing is validated on construction, and a
/// malformed URL simply surfaces as a connection-level failure when sent.
/// Constructed fresh per call and immutable once handed to a transport.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method (GET, POST, ...)
    pub method: String,

    /// Absolute request URL
    pub url: String,

    /// Request headers
    pub headers: HashMap<String, String>,

    /// Request body
    pub body: Body,
}

impl Request {
    /// Create a new request with no headers and an empty body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: Body::default(),
        }
    }

    /// Add a header to the request.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set a raw text body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Body::Raw(body.into());
        self
    }

    /// Set a multipart form body from named fields.
    pub fn with_form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = Body::Form(fields);
        self
    }
}

/// Decoded response content, selected by the `Content-Type` header.
#[derive(Debug, Clone)]
pub enum Content {
    /// `application/json` body
    Json(serde_json::Value),
    /// `text/xml` body
    Xml(xmltree::Element),
    /// Anything else, returned verbatim
    Text(String),
}

/// One completed HTTP call.
///
/// Created exclusively by a [`Transport`] after a send completes and
/// read-only thereafter. A status of 0 is reserved for transport-level
/// failures where no HTTP response was received; every other value is the
/// integer status reported by the server.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: String,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Create a response from a raw header block and body.
    ///
    /// The header block is parsed with [`parse_header_block`], including
    /// unfolding of legacy continuation lines.
    pub fn from_head(status: u16, head: &str, body: impl Into<String>) -> Self {
        Self::new(status, parse_header_block(head), body)
    }

    /// The response representing a connection-level failure (DNS failure,
    /// connection refused, TLS failure, timeout): status 0, no headers, and
    /// a fixed placeholder body.
    pub fn connection_failure() -> Self {
        Self::new(0, HashMap::new(), CONNECTION_FAILURE_BODY)
    }

    /// HTTP status code; 0 means no response was received.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers, keyed exactly as received.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Raw response body, possibly empty.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// True iff the exchange failed: any status outside 200..=299,
    /// including the status-0 connection-failure sentinel.
    pub fn is_error(&self) -> bool {
        self.status < 200 || self.status > 299
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the body as JSON if the response is a success.
    ///
    /// Returns `None` when the response is an error, and also when a 2xx
    /// body is not valid JSON (absence rather than a decode fault).
    pub fn content_json(&self) -> Option<serde_json::Value> {
        if self.is_error() {
            return None;
        }
        serde_json::from_str(&self.body).ok()
    }

    /// Decode the body into a typed value, with the same absence policy as
    /// [`content_json`](Self::content_json).
    pub fn json<T: DeserializeOwned>(&self) -> Option<T> {
        if self.is_error() {
            return None;
        }
        serde_json::from_str(&self.body).ok()
    }

    /// Decode the body according to the declared `Content-Type`.
    ///
    /// `application/json` decodes as JSON, `text/xml` as an XML document,
    /// anything else (including a missing `Content-Type`) is returned as raw
    /// text. Returns `None` when the response is an error or when a declared
    /// JSON/XML body fails to parse.
    pub fn content(&self) -> Option<Content> {
        if self.is_error() {
            return None;
        }
        let content_type = self.header("Content-Type").unwrap_or("");
        if content_type.contains("application/json") {
            self.content_json().map(Content::Json)
        } else if content_type.contains("text/xml") {
            xmltree::Element::parse(self.body.as_bytes())
                .ok()
                .map(Content::Xml)
        } else {
            Some(Content::Text(self.body.clone()))
        }
    }

    /// Human-readable error description, only meaningful for error
    /// responses.
    ///
    /// Prefers the [`ERROR_MESSAGE_HEADER`] header and falls back to the raw
    /// body when it is absent. The text is for debugging only: its format is
    /// unstable and callers must not branch on its content. Returns `None`
    /// when the response is a success.
    pub fn error_message(&self) -> Option<String> {
        if !self.is_error() {
            return None;
        }
        match self.header(ERROR_MESSAGE_HEADER) {
            Some(message) => Some(message.to_string()),
            None => Some(self.body.clone()),
        }
    }
}

/// Capability to send one request and manage basic-auth credentials.
///
/// Exactly one production implementation exists
/// ([`HttpTransport`](crate::http::HttpTransport)); tests provide scripted
/// doubles behind the same trait.
pub trait Transport: Send {
    /// Store the username and password used for HTTP basic authentication
    /// on all subsequent sends. No network effect.
    fn set_basic_auth(&mut self, username: &str, password: &str);

    /// Perform the HTTP exchange synchronously.
    ///
    /// Never fails outward: a connection-level failure is reported as
    /// [`Response::connection_failure`], not as an error or panic.
    fn send(&self, request: &Request) -> Response;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn response_with(status: u16, content_type: Option<&str>, body: &str) -> Response {
        let mut headers = HashMap::new();
        if let Some(ct) = content_type {
            headers.insert("Content-Type".to_string(), ct.to_string());
        }
        Response::new(status, headers, body)
    }

    #[rstest]
    #[case(0, true)]
    #[case(100, true)]
    #[case(199, true)]
    #[case(200, false)]
    #[case(204, false)]
    #[case(299, false)]
    #[case(300, true)]
    #[case(404, true)]
    #[case(500, true)]
    fn is_error_tracks_the_2xx_band(#[case] status: u16, #[case] expected: bool) {
        let response = response_with(status, None, "");
        assert_eq!(response.is_error(), expected);
    }

    #[test]
    fn content_json_decodes_success_bodies() {
        let response = response_with(200, Some("application/json"), r#"{"a":1}"#);
        assert_eq!(response.content_json(), Some(json!({"a": 1})));
    }

    #[test]
    fn content_json_is_absent_on_error_regardless_of_body() {
        let response = response_with(404, Some("application/json"), r#"{"a":1}"#);
        assert_eq!(response.content_json(), None);
    }

    #[test]
    fn content_json_is_absent_on_malformed_body() {
        let response = response_with(200, Some("application/json"), "{not json");
        assert_eq!(response.content_json(), None);
    }

    #[test]
    fn typed_json_decodes_success_bodies() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Grant {
            key: String,
        }
        let response = response_with(200, Some("application/json"), r#"{"key":"abc123"}"#);
        assert_eq!(
            response.json::<Grant>(),
            Some(Grant {
                key: "abc123".to_string()
            })
        );
    }

    #[test]
    fn content_dispatches_on_json_content_type() {
        let response = response_with(200, Some("application/json; charset=utf-8"), r#"{"a":1}"#);
        match response.content() {
            Some(Content::Json(value)) => assert_eq!(value, json!({"a": 1})),
            other => panic!("expected JSON content, got {other:?}"),
        }
    }

    #[test]
    fn content_dispatches_on_xml_content_type() {
        let response = response_with(200, Some("text/xml"), "<note><to>You</to></note>");
        match response.content() {
            Some(Content::Xml(doc)) => {
                assert_eq!(doc.name, "note");
                let to = doc.get_child("to").expect("missing <to> child");
                assert_eq!(to.get_text().as_deref(), Some("You"));
            }
            other => panic!("expected XML content, got {other:?}"),
        }
    }

    #[test]
    fn content_falls_back_to_raw_text() {
        let response = response_with(200, Some("text/plain"), "hello");
        match response.content() {
            Some(Content::Text(text)) => assert_eq!(text, "hello"),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn content_without_content_type_is_raw_text() {
        let response = response_with(200, None, "hello");
        assert!(matches!(response.content(), Some(Content::Text(t)) if t == "hello"));
    }

    #[test]
    fn content_is_absent_on_error() {
        let response = response_with(500, Some("text/plain"), "boom");
        assert!(response.content().is_none());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = response_with(200, Some("application/json"), "{}");
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(response.header("X-Missing"), None);
    }

    #[test]
    fn error_message_prefers_the_dedicated_header() {
        let mut headers = HashMap::new();
        headers.insert(ERROR_MESSAGE_HEADER.to_string(), "no such task".to_string());
        let response = Response::new(404, headers, "ignored body");
        assert_eq!(response.error_message().as_deref(), Some("no such task"));
    }

    #[test]
    fn error_message_falls_back_to_the_body() {
        let response = response_with(500, None, "internal failure");
        assert_eq!(response.error_message().as_deref(), Some("internal failure"));
    }

    #[test]
    fn error_message_is_absent_on_success() {
        let response = response_with(200, None, "ok");
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn connection_failure_is_an_error_with_placeholder_body() {
        let response = Response::connection_failure();
        assert_eq!(response.status(), 0);
        assert!(response.is_error());
        assert!(response.headers().is_empty());
        assert_eq!(response.body(), CONNECTION_FAILURE_BODY);
        assert_eq!(response.error_message().as_deref(), Some(CONNECTION_FAILURE_BODY));
    }

    #[test]
    fn from_head_parses_a_raw_header_block() {
        let response = Response::from_head(
            200,
            "HTTP/1.1 200 OK\r\nContent-Type: text/xml\r\nX-Foo: bar\r\n baz\r\n",
            "<a/>",
        );
        assert_eq!(response.header("Content-Type"), Some("text/xml"));
        assert_eq!(response.header("X-Foo"), Some("bar baz"));
    }

    #[test]
    fn request_builder_helpers() {
        let request = Request::new("POST", "https://example.com/upload")
            .with_header("X-Trace", "1")
            .with_form(vec![("file".to_string(), "contents".to_string())]);

        assert_eq!(request.method, "POST");
        assert_eq!(request.headers.get("X-Trace").map(String::as_str), Some("1"));
        assert!(matches!(request.body, Body::Form(ref f) if f.len() == 1));

        let request = Request::new("GET", "https://example.com");
        assert_eq!(request.body, Body::Raw(String::new()));
    }
}
