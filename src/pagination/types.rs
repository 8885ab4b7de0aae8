//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by all strategies and
//! by the page walker.

use crate::error::Result;
use crate::http::{RequestConfig, Transport};
use crate::types::{JsonValue, StringMap};
use futures::Stream;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::sync::Arc;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq)]
pub enum NextPage {
    /// More pages available with these parameters
    Continue {
        /// Query parameters to add/replace
        query_params: StringMap,
        /// Optional new URL (for link header and next URL pagination)
        url: Option<String>,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with query parameters
    pub fn with_params(params: StringMap) -> Self {
        Self::Continue {
            query_params: params,
            url: None,
        }
    }

    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue {
            query_params: StringMap::new(),
            url: Some(url.into()),
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Continuation state owned by a walker for one walk
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Current page number (for page-based pagination)
    pub page: u32,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Get initial query parameters for the first request
    fn initial_params(&self, state: &PaginationState) -> StringMap;

    /// Process a response and determine if there's a next page
    fn process_response(
        &self,
        body: &JsonValue,
        headers: &HeaderMap,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage;
}

/// Configuration for pagination behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaginationConfig {
    /// No pagination
    None,

    /// Link header pagination (RFC 5988)
    LinkHeader {
        /// Rel value to follow (default: "next")
        #[serde(default = "default_rel")]
        rel: String,
    },

    /// Next URL in response body
    NextUrl {
        /// Dot path to the next URL in the response
        path: String,
    },

    /// Page number pagination
    PageNumber {
        /// Query parameter name for page number
        #[serde(default = "default_page_param")]
        page_param: String,
        /// First page number (usually 0 or 1)
        #[serde(default = "default_start_page")]
        start_page: u32,
        /// Optional page size parameter name
        #[serde(default)]
        page_size_param: Option<String>,
        /// Page size value
        #[serde(default)]
        page_size: Option<u32>,
    },
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::LinkHeader { rel: default_rel() }
    }
}

fn default_rel() -> String {
    "next".to_string()
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_start_page() -> u32 {
    1
}

impl PaginationConfig {
    /// Create link header pagination config
    pub fn link_header(rel: impl Into<String>) -> Self {
        Self::LinkHeader { rel: rel.into() }
    }

    /// Create next URL pagination config
    pub fn next_url(path: impl Into<String>) -> Self {
        Self::NextUrl { path: path.into() }
    }

    /// Create page number pagination config
    pub fn page_number(page_param: impl Into<String>, start_page: u32) -> Self {
        Self::PageNumber {
            page_param: page_param.into(),
            start_page,
            page_size_param: None,
            page_size: None,
        }
    }

    /// Build the paginator this config describes
    pub fn build(&self) -> Arc<dyn Paginator> {
        use super::strategies::{
            LinkHeaderPaginator, NextUrlPaginator, NoPaginator, PageNumberPaginator,
        };

        match self {
            Self::None => Arc::new(NoPaginator),
            Self::LinkHeader { rel } => Arc::new(LinkHeaderPaginator::new(rel.clone())),
            Self::NextUrl { path } => Arc::new(NextUrlPaginator::new(path.clone())),
            Self::PageNumber {
                page_param,
                start_page,
                page_size_param,
                page_size,
            } => {
                let mut paginator = PageNumberPaginator::new(page_param.clone(), *start_page);
                if let (Some(param), Some(size)) = (page_size_param, page_size) {
                    paginator = paginator.with_page_size(param.clone(), *size);
                }
                Arc::new(paginator)
            }
        }
    }
}

// ============================================================================
// Pages and walkers
// ============================================================================

/// One batch of raw items returned by a single paginated request
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based position of this page in the walk
    pub number: u32,
    /// Raw, unconverted items in response order
    pub items: Vec<JsonValue>,
}

impl Page {
    pub fn new(number: u32, items: Vec<JsonValue>) -> Self {
        Self { number, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for Page {
    type Item = JsonValue;
    type IntoIter = std::vec::IntoIter<JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Lazy, single-pass sequence of pages
pub type PageStream<'a> = Pin<Box<dyn Stream<Item = Result<Page>> + Send + 'a>>;

/// Produces the pages of a collection resource.
///
/// Implementations own all continuation state and must issue at most one
/// transport call per page the consumer actually asks for.
pub trait PageWalker: Send + Sync {
    /// Walk the collection at `path`, passing `options` through to the fetches
    fn walk<'a>(
        &'a self,
        transport: &'a dyn Transport,
        path: String,
        options: RequestConfig,
    ) -> PageStream<'a>;
}

/// Look up a dot-separated path (`data.items`, `$.links.next`) in a JSON value
pub fn lookup_path<'v>(value: &'v JsonValue, path: &str) -> Option<&'v JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() {
        return Some(value);
    }

    let mut current = value;
    for part in path.split('.') {
        current = match current {
            JsonValue::Object(map) => map.get(part)?,
            JsonValue::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
