//! Pagination strategy implementations
//!
//! Each strategy handles a specific pagination pattern.

use super::types::{lookup_path, NextPage, PaginationState, Paginator};
use crate::types::{JsonValue, StringMap};
use reqwest::header::HeaderMap;

// ============================================================================
// Link Header Pagination
// ============================================================================

/// Link header pagination (RFC 5988)
///
/// Extracts next page URL from the Link header. This is how GitHub paginates.
/// Format: `Link: <https://api.github.com/...?page=2>; rel="next", ...`
#[derive(Debug, Clone)]
pub struct LinkHeaderPaginator {
    /// Rel value to follow (default: "next")
    pub rel: String,
}

impl Default for LinkHeaderPaginator {
    fn default() -> Self {
        Self {
            rel: "next".to_string(),
        }
    }
}

impl LinkHeaderPaginator {
    /// Create a new link header paginator
    pub fn new(rel: impl Into<String>) -> Self {
        Self { rel: rel.into() }
    }
}

impl Paginator for LinkHeaderPaginator {
    fn initial_params(&self, _state: &PaginationState) -> StringMap {
        StringMap::new()
    }

    fn process_response(
        &self,
        _body: &JsonValue,
        headers: &HeaderMap,
        _records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        if let Some(link_header) = headers.get("link").and_then(|v| v.to_str().ok()) {
            if let Some(next_url) = parse_link_header(link_header, &self.rel) {
                state.next_page();
                return NextPage::with_url(next_url);
            }
        }

        NextPage::Done
    }
}

/// Parse a Link header and extract the URL for the given rel
///
/// Entries are delimited by their `<...>` targets, so commas inside a URL
/// are kept.
pub fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    // <url>; rel="next", <url>; rel="last"
    let mut rest = header;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let end = after.find('>')?;
        let url = &after[..end];

        let tail = &after[end + 1..];
        let params = tail.find('<').map_or(tail, |next| &tail[..next]);
        rest = &tail[params.len()..];

        for param in params.split(';') {
            let param = param.trim().trim_end_matches(',').trim_end();
            if let Some(rel) = param.strip_prefix("rel=") {
                let rel = rel.trim_matches('"').trim_matches('\'');
                // rel may hold several space-separated relation types
                if rel.split_whitespace().any(|r| r == target_rel) {
                    return Some(url.to_string());
                }
            }
        }
    }

    None
}

// ============================================================================
// Next URL Pagination
// ============================================================================

/// Next URL pagination (URL in response body)
///
/// Common patterns:
/// - `{ "next": "https://api.example.com/items?page=2" }`
/// - `{ "pagination": { "next_url": "..." } }`
#[derive(Debug, Clone)]
pub struct NextUrlPaginator {
    /// Dot path to the next URL in the response
    pub path: String,
}

impl NextUrlPaginator {
    /// Create a new next URL paginator
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Paginator for NextUrlPaginator {
    fn initial_params(&self, _state: &PaginationState) -> StringMap {
        StringMap::new()
    }

    fn process_response(
        &self,
        body: &JsonValue,
        _headers: &HeaderMap,
        _records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        if let Some(next_url) = lookup_path(body, &self.path).and_then(JsonValue::as_str) {
            if !next_url.is_empty() {
                state.next_page();
                return NextPage::with_url(next_url);
            }
        }

        NextPage::Done
    }
}

// ============================================================================
// Page Number Pagination
// ============================================================================

/// Page number pagination
///
/// Common patterns:
/// - `?page=2`
/// - `?page=2&per_page=50`
///
/// Stops on an empty page, or on a short page when a page size is set.
#[derive(Debug, Clone)]
pub struct PageNumberPaginator {
    /// Query parameter name for page number
    pub page_param: String,
    /// First page number (usually 0 or 1)
    pub start_page: u32,
    /// Optional page size parameter name
    pub page_size_param: Option<String>,
    /// Page size value
    pub page_size: Option<u32>,
}

impl PageNumberPaginator {
    /// Create a new page number paginator
    pub fn new(page_param: impl Into<String>, start_page: u32) -> Self {
        Self {
            page_param: page_param.into(),
            start_page,
            page_size_param: None,
            page_size: None,
        }
    }

    /// Set page size parameter
    #[must_use]
    pub fn with_page_size(mut self, param: impl Into<String>, size: u32) -> Self {
        self.page_size_param = Some(param.into());
        self.page_size = Some(size);
        self
    }

    fn params_for(&self, page: u32) -> StringMap {
        let mut params = StringMap::new();
        params.insert(self.page_param.clone(), page.to_string());
        if let (Some(param), Some(size)) = (&self.page_size_param, self.page_size) {
            params.insert(param.clone(), size.to_string());
        }
        params
    }
}

impl Paginator for PageNumberPaginator {
    fn initial_params(&self, state: &PaginationState) -> StringMap {
        let page = if state.page == 0 {
            self.start_page
        } else {
            state.page
        };
        self.params_for(page)
    }

    fn process_response(
        &self,
        _body: &JsonValue,
        _headers: &HeaderMap,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        if records_count == 0 {
            return NextPage::Done;
        }

        if let Some(size) = self.page_size {
            if records_count < size as usize {
                return NextPage::Done;
            }
        }

        if state.page == 0 {
            state.page = self.start_page;
        }
        state.next_page();

        NextPage::with_params(self.params_for(state.page))
    }
}

// ============================================================================
// No Pagination
// ============================================================================

/// No pagination - single request
#[derive(Debug, Clone, Default)]
pub struct NoPaginator;

impl Paginator for NoPaginator {
    fn initial_params(&self, _state: &PaginationState) -> StringMap {
        StringMap::new()
    }

    fn process_response(
        &self,
        _body: &JsonValue,
        _headers: &HeaderMap,
        _records_count: usize,
        _state: &mut PaginationState,
    ) -> NextPage {
        NextPage::Done
    }
}
