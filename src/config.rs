//! Client configuration
//!
//! A [`ClientConfig`] describes one API: where it lives, which media types to
//! negotiate, how its collections paginate and how payloads are converted.
//! It is loaded from YAML (or JSON) and turned into a ready
//! [`ResourceHandler`].

use crate::convert::{ConverterType, Modelizer, Rawlizer};
use crate::error::{Error, Result, ResultExt};
use crate::handler::ResourceHandler;
use crate::http::{HttpClient, HttpClientConfig};
use crate::media::{ContentNegotiator, DEFAULT_NAMESPACE, DEFAULT_VERSION};
use crate::pagination::{PaginationConfig, PaginatorWalker};
use crate::types::{MediaVariant, OptionStringExt, StringMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every resource path is resolved against
    pub base_url: String,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: StringMap,

    /// Path prefix for the handler
    #[serde(default)]
    pub prefix: String,

    /// Media types to negotiate
    #[serde(default)]
    pub media: MediaConfig,

    /// How collections paginate
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Dot path to the item list inside a page body
    #[serde(default)]
    pub items_path: Option<String>,

    /// Converter bound to the handler
    #[serde(default)]
    pub converter: ConverterKind,
}

fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    /// Config with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: None,
            timeout_secs: default_timeout(),
            headers: StringMap::new(),
            prefix: String::new(),
            media: MediaConfig::default(),
            pagination: PaginationConfig::default(),
            items_path: None,
            converter: ConverterKind::default(),
        }
    }

    /// Check the config for values no client could work with
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::invalid_value("base_url", "cannot be empty"));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }

        if self.headers.keys().any(|name| name.trim().is_empty()) {
            return Err(Error::invalid_value("headers", "header names cannot be empty"));
        }

        self.media.validate()?;

        match &self.pagination {
            PaginationConfig::NextUrl { path } if path.is_empty() => {
                Err(Error::invalid_value("pagination.path", "cannot be empty"))
            }
            PaginationConfig::PageNumber { page_param, .. } if page_param.is_empty() => {
                Err(Error::invalid_value("pagination.page_param", "cannot be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs));

        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        if let Some(agent) = self.user_agent.clone().none_if_empty() {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }

    /// Build the HTTP transport
    pub fn http_client(&self) -> Result<HttpClient> {
        HttpClient::with_config(self.http_config())
    }

    /// Page walker for the configured pagination and item path
    pub fn walker(&self) -> PaginatorWalker {
        let walker = PaginatorWalker::from_config(&self.pagination);
        match self.items_path.clone().none_if_empty() {
            Some(path) => walker.with_items_path(path),
            None => walker,
        }
    }

    /// Validate, then wire a handler over a fresh HTTP transport
    pub fn resource_handler(&self) -> Result<ResourceHandler> {
        self.validate()?;
        let transport = self.http_client()?;

        debug!(
            "Handler for {} (prefix '{}', converter {:?})",
            self.base_url, self.prefix, self.converter
        );

        Ok(ResourceHandler::new(Arc::new(transport))
            .with_prefix(self.prefix.clone())
            .with_converter(self.converter.converter_type())
            .with_walker(Arc::new(self.walker()))
            .with_media(self.media.negotiator()))
    }
}

// ============================================================================
// Media Config
// ============================================================================

/// Media types announced through the `Accept` header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Vendor namespace
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// API version
    #[serde(default = "default_version")]
    pub version: String,

    /// Variants to request, in order
    #[serde(default)]
    pub variants: Vec<MediaVariant>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            version: default_version(),
            variants: Vec::new(),
        }
    }
}

impl MediaConfig {
    fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            return Err(Error::invalid_value("media.namespace", "cannot be empty"));
        }
        if self.version.is_empty() {
            return Err(Error::invalid_value("media.version", "cannot be empty"));
        }
        Ok(())
    }

    /// Negotiator holding the configured variants
    pub fn negotiator(&self) -> ContentNegotiator {
        let mut negotiator = ContentNegotiator::with_version(&self.namespace, &self.version);
        for variant in &self.variants {
            negotiator.add(*variant);
        }
        negotiator
    }
}

// ============================================================================
// Converter Kind
// ============================================================================

/// Built-in converter selectable from config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverterKind {
    /// Build models
    #[default]
    Model,
    /// Keep raw JSON
    Raw,
}

impl ConverterKind {
    pub fn converter_type(self) -> ConverterType {
        match self {
            Self::Model => ConverterType::of::<Modelizer>(),
            Self::Raw => ConverterType::of::<Rawlizer>(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate a config file; `.json` files are read as JSON, anything
/// else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let context = || format!("Invalid config file '{}'", path.display());
    let config: ClientConfig = if is_json {
        serde_json::from_str(&content).with_context(context)?
    } else {
        serde_yaml::from_str(&content).with_context(context)?
    };
    config.validate()?;
    Ok(config)
}

/// Parse and validate a YAML config
pub fn load_config_from_str(yaml: &str) -> Result<ClientConfig> {
    let config: ClientConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}
