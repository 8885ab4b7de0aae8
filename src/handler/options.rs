//! Per-call options for resource handler operations

use crate::convert::ConverterType;
use crate::http::RequestConfig;

/// Options for one handler call, passed by value and never shared.
///
/// The converter override is consumed by the handler; only `request`
/// reaches the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOptions {
    /// Converter to use for this call instead of the handler's
    pub converter: Option<ConverterType>,
    /// Options forwarded to the transport
    pub request: RequestConfig,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the converter for this call
    #[must_use]
    pub fn converter(mut self, converter: ConverterType) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Replace the transport options
    #[must_use]
    pub fn request(mut self, request: RequestConfig) -> Self {
        self.request = request;
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request = self.request.query(key, value);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request = self.request.header(key, value);
        self
    }
}

impl From<RequestConfig> for FetchOptions {
    fn from(request: RequestConfig) -> Self {
        Self {
            converter: None,
            request,
        }
    }
}

/// Normalize a result limit: negative limits count as positive, and zero
/// means no limit at all.
pub fn normalize_limit(limit: Option<i64>) -> Option<u64> {
    limit.filter(|l| *l != 0).map(i64::unsigned_abs)
}
