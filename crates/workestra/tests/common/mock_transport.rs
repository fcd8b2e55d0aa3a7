//! Mock transport for testing the client without a network
//!
//! Implements the same [`Transport`] trait as the production HTTP
//! transport, but records every request and credential change and returns
//! scripted responses. The handle is cheaply cloneable so a test can keep
//! one for assertions while the client owns the other.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use workestra::{Request, Response, Transport};

/// A scripted transport double.
///
/// Queued responses are returned in order; once the queue is empty every
/// send gets an empty 200.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    sent: Vec<Request>,
    queued: VecDeque<Response>,
    credentials: Option<(String, String)>,
}

impl MockTransport {
    /// Create a new mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to return on a subsequent send.
    pub fn queue_response(&self, response: Response) {
        self.inner.lock().unwrap().queued.push_back(response);
    }

    /// Every request sent through this transport, in order.
    pub fn sent_requests(&self) -> Vec<Request> {
        self.inner.lock().unwrap().sent.clone()
    }

    /// The most recently stored basic-auth pair, if any.
    pub fn credentials(&self) -> Option<(String, String)> {
        self.inner.lock().unwrap().credentials.clone()
    }
}

impl Transport for MockTransport {
    fn set_basic_auth(&mut self, username: &str, password: &str) {
        self.inner.lock().unwrap().credentials =
            Some((username.to_string(), password.to_string()));
    }

    fn send(&self, request: &Request) -> Response {
        let mut inner = self.inner.lock().unwrap();
        inner.sent.push(request.clone());
        inner
            .queued
            .pop_front()
            .unwrap_or_else(|| Response::new(200, Default::default(), ""))
    }
}
