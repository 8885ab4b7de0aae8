//! Accept header accumulation for vendor media types

use crate::types::{MediaVariant, StringMap};

/// Vendor namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "github";

/// Media type version used when none is configured
pub const DEFAULT_VERSION: &str = "beta";

/// Accumulates the media-type variants a caller accepts.
///
/// Media types are kept in insertion order and are never duplicated, so
/// `add_raw().add_full()` always renders raw before full. The set only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNegotiator {
    namespace: String,
    version: String,
    media_types: Vec<String>,
}

impl Default for ContentNegotiator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentNegotiator {
    /// Create an empty negotiator for `application/vnd.github.beta.*`
    pub fn new() -> Self {
        Self::with_version(DEFAULT_NAMESPACE, DEFAULT_VERSION)
    }

    /// Create an empty negotiator for a custom namespace and version
    pub fn with_version(namespace: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            version: version.into(),
            media_types: Vec::new(),
        }
    }

    /// Vendor namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Media type version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Render the media type for a variant
    pub fn media_type(&self, variant: MediaVariant) -> String {
        format!(
            "application/vnd.{}.{}.{}+json",
            self.namespace, self.version, variant
        )
    }

    /// Accept a variant
    pub fn add(&mut self, variant: MediaVariant) -> &mut Self {
        let media_type = self.media_type(variant);
        if !self.media_types.contains(&media_type) {
            self.media_types.push(media_type);
        }
        self
    }

    /// Accept the raw variant
    pub fn add_raw(&mut self) -> &mut Self {
        self.add(MediaVariant::Raw)
    }

    /// Accept the text variant
    pub fn add_text(&mut self) -> &mut Self {
        self.add(MediaVariant::Text)
    }

    /// Accept the html variant
    pub fn add_html(&mut self) -> &mut Self {
        self.add(MediaVariant::Html)
    }

    /// Accept the full variant
    pub fn add_full(&mut self) -> &mut Self {
        self.add(MediaVariant::Full)
    }

    /// Accepted media types, in insertion order
    pub fn media_types(&self) -> &[String] {
        &self.media_types
    }

    pub fn is_empty(&self) -> bool {
        self.media_types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.media_types.len()
    }

    /// Comma-joined `Accept` value, or `None` when nothing was added
    pub fn header_value(&self) -> Option<String> {
        if self.media_types.is_empty() {
            None
        } else {
            Some(self.media_types.join(", "))
        }
    }

    /// Single-entry `{"Accept": ...}` map, or `None` to keep the transport default
    pub fn header(&self) -> Option<StringMap> {
        self.header_value().map(|value| {
            let mut headers = StringMap::new();
            headers.insert("Accept".to_string(), value);
            headers
        })
    }
}
