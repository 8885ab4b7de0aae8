//! Content negotiation module
//!
//! Builds the `Accept` header for custom vendor media types such as
//! `application/vnd.github.beta.raw+json`.

mod negotiator;

pub use negotiator::{ContentNegotiator, DEFAULT_NAMESPACE, DEFAULT_VERSION};

#[cfg(test)]
mod tests;
