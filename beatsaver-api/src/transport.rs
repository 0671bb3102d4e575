//! HTTP transport for the BeatSaver REST API.
//!
//! A [`Transport`] wraps one pooled [`reqwest::blocking::Client`] bound to a
//! base URL (by default [`BASE_URL`]). It performs exactly one HTTP exchange
//! per call and hands back a [`RawResponse`] whatever the status code is;
//! classifying the outcome is the job of [`resolve`](crate::resolve::resolve).
//!
//! No retries, no auth headers, no cookie store.

use std::fmt;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::client::ClientConfig;
use crate::error::Result;
use crate::types::QueryParams;

/// Production endpoint of the catalog service.
pub const BASE_URL: &str = "https://api.beatsaver.com";

/// HTTP verb used by a [`Request`]. The service only needs these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// A request described as plain data, relative to the transport base URL.
///
/// Resource clients build these; [`Transport::send`] executes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP verb.
    pub method: Method,
    /// Path starting with `/`, already percent-encoded.
    pub path: String,
    /// Query parameters, in emission order. Unset values are never present.
    pub query: QueryParams,
    /// JSON body (POST only).
    pub body: Option<Value>,
}

impl Request {
    /// A GET request with no query parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    /// A POST request carrying `body` as JSON.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: QueryParams::new(),
            body: Some(body),
        }
    }

    /// Replace the query parameter set.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}

/// Outcome of one HTTP exchange, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Numeric HTTP status.
    pub status: u16,
    /// Body bytes exactly as received.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status is in `200..=299`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Best-effort JSON view of the body. `None` if the body is not JSON.
    ///
    /// Never fails; strict decoding happens in
    /// [`resolve`](crate::resolve::resolve).
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Body as text, with invalid UTF-8 replaced by U+FFFD. For diagnostics
    /// only; never parsed.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Shared, reusable connection context.
///
/// `Transport` is `Send + Sync`; a single instance may serve concurrent
/// callers. Its configuration is fixed at construction.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    base_url: String,
}

impl Transport {
    /// Build a transport from `config`.
    ///
    /// Fails only if the underlying TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue `GET {base}{path}` with optional query parameters.
    pub fn get(&self, path: &str, query: Option<&QueryParams>) -> Result<RawResponse> {
        let url = format!("{}{path}", self.base_url);
        let mut req = self.http.get(&url);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            req = req.query(query.as_pairs());
        }
        debug!(
            method = "GET",
            path,
            params = query.map_or(0, QueryParams::len),
            "sending request"
        );
        Self::read(req.send()?, path)
    }

    /// Issue `POST {base}{path}` with an optional JSON body.
    pub fn post(&self, path: &str, body: Option<&Value>) -> Result<RawResponse> {
        let url = format!("{}{path}", self.base_url);
        let mut req = self.http.post(&url);
        if let Some(body) = body {
            req = req.json(body);
        }
        debug!(method = "POST", path, "sending request");
        Self::read(req.send()?, path)
    }

    /// Execute a prepared [`Request`].
    pub fn send(&self, request: &Request) -> Result<RawResponse> {
        match request.method {
            Method::Get => self.get(&request.path, Some(&request.query)),
            Method::Post => self.post(&request.path, request.body.as_ref()),
        }
    }

    fn read(resp: reqwest::blocking::Response, path: &str) -> Result<RawResponse> {
        let status = resp.status().as_u16();
        debug!(path, status, "received response");
        let body = resp.bytes()?.to_vec();
        Ok(RawResponse { status, body })
    }
}
