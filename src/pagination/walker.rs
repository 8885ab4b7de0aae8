//! Page walker driven by a pagination strategy

use super::types::{
    lookup_path, NextPage, Page, PageStream, PageWalker, PaginationConfig, PaginationState,
    Paginator,
};
use crate::error::Result;
use crate::http::{RequestConfig, Transport};
use crate::types::{JsonValue, StringMap};
use futures::stream;
use std::sync::Arc;
use tracing::debug;

/// Where the next fetch goes
#[derive(Debug, Clone)]
struct Cursor {
    url: String,
    params: StringMap,
    /// A URL handed out by the server already carries every query parameter
    from_link: bool,
}

/// Walks a collection page by page with a [`Paginator`].
///
/// Items are taken from the whole body when it is a JSON array, or from the
/// array found at `items_path` (e.g. `items` for search results).
#[derive(Clone)]
pub struct PaginatorWalker {
    paginator: Arc<dyn Paginator>,
    items_path: Option<String>,
}

impl Default for PaginatorWalker {
    fn default() -> Self {
        Self::from_config(&PaginationConfig::default())
    }
}

impl PaginatorWalker {
    /// Create a walker around a paginator
    pub fn new(paginator: Arc<dyn Paginator>) -> Self {
        Self {
            paginator,
            items_path: None,
        }
    }

    /// Create a walker from a pagination config
    pub fn from_config(config: &PaginationConfig) -> Self {
        Self::new(config.build())
    }

    /// Take page items from a nested array
    #[must_use]
    pub fn with_items_path(mut self, path: impl Into<String>) -> Self {
        self.items_path = Some(path.into());
        self
    }

    pub fn items_path(&self) -> Option<&str> {
        self.items_path.as_deref()
    }

    /// Split a response body into page items
    pub fn extract_items(&self, body: &JsonValue) -> Vec<JsonValue> {
        let target = match &self.items_path {
            Some(path) => match lookup_path(body, path) {
                Some(found) => found,
                None => return Vec::new(),
            },
            None => body,
        };

        match target {
            JsonValue::Array(items) => items.clone(),
            JsonValue::Null => Vec::new(),
            other => vec![other.clone()],
        }
    }

    async fn fetch_page(
        &self,
        transport: &dyn Transport,
        base_path: &str,
        cursor: Cursor,
        options: RequestConfig,
        number: u32,
        state: &mut PaginationState,
    ) -> Result<(Page, Option<Cursor>)> {
        let mut request = options;
        if cursor.from_link {
            request.query.clear();
        }
        request.query.extend(cursor.params);

        debug!("Fetching page {number}: {}", cursor.url);
        let response = transport.get(&cursor.url, request).await?;
        let body = response.json()?;
        let headers = response.headers;

        let items = self.extract_items(&body);
        let next = self
            .paginator
            .process_response(&body, &headers, items.len(), state);

        let next = match next {
            NextPage::Done => None,
            NextPage::Continue {
                query_params,
                url: Some(url),
            } => Some(Cursor {
                url,
                params: query_params,
                from_link: true,
            }),
            NextPage::Continue {
                query_params,
                url: None,
            } => Some(Cursor {
                url: base_path.to_string(),
                params: query_params,
                from_link: false,
            }),
        };

        debug!("Page {number}: {} items", items.len());
        Ok((Page::new(number, items), next))
    }
}

impl std::fmt::Debug for PaginatorWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatorWalker")
            .field("items_path", &self.items_path)
            .finish_non_exhaustive()
    }
}

impl PageWalker for PaginatorWalker {
    fn walk<'a>(
        &'a self,
        transport: &'a dyn Transport,
        path: String,
        options: RequestConfig,
    ) -> PageStream<'a> {
        let state = PaginationState::new();
        let first = Cursor {
            url: path.clone(),
            params: self.paginator.initial_params(&state),
            from_link: false,
        };

        Box::pin(stream::unfold(
            (Some(first), state, 0u32),
            move |(cursor, mut state, number)| {
                let options = options.clone();
                let path = path.clone();
                async move {
                    let cursor = cursor?;
                    let number = number + 1;
                    match self
                        .fetch_page(transport, &path, cursor, options, number, &mut state)
                        .await
                    {
                        Ok((page, next)) => Some((Ok(page), (next, state, number))),
                        // A failed fetch ends the walk
                        Err(e) => Some((Err(e), (None, state, number))),
                    }
                }
            },
        ))
    }
}
