//! HTTP transport module
//!
//! Defines the [`Transport`] contract resource handlers talk to, the
//! request/response types crossing it, and a reqwest-backed implementation.
//!
//! There are no retries, backoff or rate limiting here; a transport returns
//! the first outcome it gets.

mod client;
mod transport;
mod types;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use transport::Transport;
pub use types::{RawResponse, RequestConfig, NO_CONTENT};

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
