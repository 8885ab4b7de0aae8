//! Transport contract used by resource handlers

use super::types::{RawResponse, RequestConfig};
use crate::error::Result;
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use tracing::warn;

/// Anything able to issue requests against a resource path.
///
/// Implementations must report a missing resource as
/// [`Error::NotFound`](crate::Error::NotFound) and return every other
/// successful exchange as a [`RawResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a request
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestConfig,
    ) -> Result<RawResponse>;

    async fn get(&self, path: &str, options: RequestConfig) -> Result<RawResponse> {
        self.request(Method::GET, path, options).await
    }

    async fn post(&self, path: &str, data: JsonValue, options: RequestConfig) -> Result<RawResponse> {
        self.request(Method::POST, path, options.json(data)).await
    }

    async fn put(&self, path: &str, options: RequestConfig) -> Result<RawResponse> {
        self.request(Method::PUT, path, options).await
    }

    async fn delete(&self, path: &str, options: RequestConfig) -> Result<RawResponse> {
        self.request(Method::DELETE, path, options).await
    }

    async fn head(&self, path: &str, options: RequestConfig) -> Result<RawResponse> {
        self.request(Method::HEAD, path, options).await
    }

    /// Issue a request for a verb given by name.
    ///
    /// Unknown verb names fall back to HEAD.
    async fn dispatch(&self, verb: &str, path: &str, options: RequestConfig) -> Result<RawResponse> {
        let method = Method::from_name(verb).unwrap_or_else(|| {
            warn!("Unknown HTTP verb '{verb}', falling back to HEAD");
            Method::HEAD
        });
        self.request(method, path, options).await
    }
}
