//! In-memory transport recording every call, for unit tests

use super::transport::Transport;
use super::types::{RawResponse, RequestConfig};
use crate::error::{Error, Result};
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned outcome for a route
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Response(RawResponse),
    NotFound,
    Status(u16),
}

/// One recorded request
#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub method: Method,
    pub path: String,
    pub options: RequestConfig,
}

/// Transport answering from a route table; unknown routes are NotFound
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    routes: Mutex<HashMap<(Method, String), Reply>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), reply);
        self
    }

    pub fn json(&self, method: Method, path: &str, body: JsonValue) -> &Self {
        self.on(method, path, Reply::Response(RawResponse::json_body(&body)))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.path).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestConfig,
    ) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            options,
        });

        let reply = self
            .routes
            .lock()
            .unwrap()
            .get(&(method, path.to_string()))
            .cloned();

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Status(status)) => Err(Error::http_status(status, "")),
            Some(Reply::NotFound) | None => Err(Error::not_found(path)),
        }
    }
}
