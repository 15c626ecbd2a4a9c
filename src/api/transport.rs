use std::fmt;

use thiserror::Error;
use tracing::debug;

/// HTTP verbs the remote API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One request to the remote API, relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw reply before envelope interpretation.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced an HTTP status (connection refused,
    /// DNS failure, timeout at the socket level).
    #[error("{0}")]
    Connection(String),
}

/// Seam between the gateway and the actual HTTP stack. One call per
/// operation; the gateway never retries.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError>;
}

/// `reqwest`-backed transport used by the real client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|err| TransportError::Connection(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, path = request.path, "sending request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|err| TransportError::Connection(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|err| TransportError::Connection(err.to_string()))?;

        Ok(ApiReply {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
            body,
        })
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::{ApiReply, ApiRequest, Transport, TransportError};

    /// Canned transport that records every request it sees. Clones share the
    /// same script and log, so a test can keep one handle for assertions
    /// after handing the other to the gateway.
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        replies: Rc<RefCell<VecDeque<Result<ApiReply, TransportError>>>>,
        requests: Rc<RefCell<Vec<ApiRequest>>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push_ok(&self, body: &str) {
            self.replies.borrow_mut().push_back(Ok(ApiReply {
                status: 200,
                reason: "OK".into(),
                body: body.into(),
            }));
        }

        pub fn push_status(&self, status: u16, reason: &str) {
            self.replies.borrow_mut().push_back(Ok(ApiReply {
                status,
                reason: reason.into(),
                body: String::new(),
            }));
        }

        pub fn push_connection_error(&self, message: &str) {
            self.replies
                .borrow_mut()
                .push_back(Err(TransportError::Connection(message.into())));
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for FakeTransport {
        fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Connection("no scripted reply".into())))
        }
    }
}
