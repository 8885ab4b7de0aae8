//! The resource handler
//!
//! Single orchestration point for resource-style requests: prefixes paths,
//! negotiates media types, resolves a converter per call and drives
//! paginated walks.

use super::options::{normalize_limit, FetchOptions};
use super::reader::ResourceReader;
use crate::convert::{default_converter, ConversionStrategy, Converted, ConverterType, ModelHint};
use crate::error::{Error, Result};
use crate::http::{RequestConfig, Transport, NO_CONTENT};
use crate::media::ContentNegotiator;
use crate::pagination::{PageStream, PageWalker, PaginatorWalker};
use crate::types::JsonValue;
use futures::{stream, Stream, StreamExt};
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use tracing::debug;

/// Lazy, single-pass sequence of converted resources
pub type ResourceStream<'a> = Pin<Box<dyn Stream<Item = Result<Converted>> + Send + 'a>>;

/// Mediates between resource-level calls and a [`Transport`].
///
/// Configuration (prefix, converter, walker, media types, reader delegate)
/// is set while building the handler; every operation only reads it.
#[derive(Clone)]
pub struct ResourceHandler {
    transport: Arc<dyn Transport>,
    prefix: String,
    converter: Option<ConverterType>,
    walker: Arc<dyn PageWalker>,
    media: ContentNegotiator,
    reader: Option<Arc<dyn ResourceReader>>,
}

impl ResourceHandler {
    /// Create a handler without prefix, following Link headers across pages
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            prefix: String::new(),
            converter: None,
            walker: Arc::new(PaginatorWalker::default()),
            media: ContentNegotiator::new(),
            reader: None,
        }
    }

    /// Set the path prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Bind a converter type to this handler
    #[must_use]
    pub fn with_converter(mut self, converter: ConverterType) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Set the page walker used by `fetch_many`
    #[must_use]
    pub fn with_walker(mut self, walker: Arc<dyn PageWalker>) -> Self {
        self.walker = walker;
        self
    }

    /// Set the content negotiator
    #[must_use]
    pub fn with_media(mut self, media: ContentNegotiator) -> Self {
        self.media = media;
        self
    }

    /// Delegate `read_one`/`read_many` to another reader
    #[must_use]
    pub fn with_reader(mut self, reader: Arc<dyn ResourceReader>) -> Self {
        self.reader = Some(reader);
        self
    }

    /// A child handler for a sub-path, sharing transport and configuration.
    ///
    /// The reader delegate is not inherited.
    pub fn scoped(&self, sub_path: impl fmt::Display) -> Self {
        Self {
            prefix: self.prefix_resource(sub_path),
            reader: None,
            ..self.clone()
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn converter(&self) -> Option<ConverterType> {
        self.converter
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn media(&self) -> &ContentNegotiator {
        &self.media
    }

    /// Negotiator for configuration-time `add_*` calls
    pub fn media_mut(&mut self) -> &mut ContentNegotiator {
        &mut self.media
    }

    /// The reader serving `read_one`/`read_many`: the delegate, or this handler
    pub fn reader(&self) -> &dyn ResourceReader {
        match &self.reader {
            Some(reader) => reader.as_ref(),
            None => self as &dyn ResourceReader,
        }
    }

    pub(crate) fn delegate(&self) -> Option<&Arc<dyn ResourceReader>> {
        self.reader.as_ref()
    }

    /// Join the prefix and a resource with `/`, without outer slashes
    pub fn prefix_resource(&self, resource: impl fmt::Display) -> String {
        format!("{}/{}", self.prefix, resource)
            .trim_matches('/')
            .to_string()
    }

    /// Build the converter for one call.
    ///
    /// Resolution order: the call's override (taken out of `options`), the
    /// handler's converter, then [`Modelizer`](crate::convert::Modelizer).
    pub fn get_converter(&self, options: &mut FetchOptions) -> Box<dyn ConversionStrategy> {
        options
            .converter
            .take()
            .or(self.converter)
            .unwrap_or_else(default_converter)
            .instantiate()
    }

    /// Add the negotiated `Accept` header unless the caller set one
    fn request_options(&self, mut request: RequestConfig) -> RequestConfig {
        if !request.has_header("Accept") {
            if let Some(value) = self.media.header_value() {
                request.headers.insert("Accept".to_string(), value);
            }
        }
        request
    }

    /// Fetch and convert a single resource
    pub async fn fetch_one(
        &self,
        resource: impl fmt::Display,
        model: Option<ModelHint>,
        mut options: FetchOptions,
    ) -> Result<Converted> {
        let path = self.prefix_resource(resource);
        let mut converter = self.get_converter(&mut options);

        debug!("GET {path}");
        let raw = self
            .transport
            .get(&path, self.request_options(options.request))
            .await?;

        converter.inject(model);
        converter.loads(raw.json()?)
    }

    /// Lazily fetch and convert the items of a paginated collection.
    ///
    /// At most `|limit|` items are produced (a zero limit means no limit);
    /// once the last one is out, no further page is requested. The first
    /// error ends the stream.
    pub fn fetch_many(
        &self,
        resource: impl fmt::Display,
        model: Option<ModelHint>,
        limit: Option<i64>,
        mut options: FetchOptions,
    ) -> ResourceStream<'_> {
        let path = self.prefix_resource(resource);
        let limit = normalize_limit(limit);
        let converter = self.get_converter(&mut options);

        debug!("GET {path} (paginated, limit {limit:?})");
        let pages = self.walker.walk(
            self.transport.as_ref(),
            path,
            self.request_options(options.request),
        );

        let items = Items {
            pages,
            buffered: Vec::new().into_iter(),
            converter,
            model,
            counter: 0,
            limit,
            done: false,
        };

        stream::unfold(items, |mut items| async move {
            let item = items.next_item().await?;
            Some((item, items))
        })
        .boxed()
    }

    /// POST `data` and convert the created resource
    pub async fn create(
        &self,
        resource: impl fmt::Display,
        data: JsonValue,
        model: Option<ModelHint>,
        mut options: FetchOptions,
    ) -> Result<Converted> {
        let path = self.prefix_resource(resource);
        let mut converter = self.get_converter(&mut options);

        debug!("POST {path}");
        let raw = self
            .transport
            .post(&path, data, self.request_options(options.request))
            .await?;

        converter.inject(model);
        converter.loads(raw.json()?)
    }

    /// Issue a call and translate its outcome into a boolean.
    ///
    /// The verb is resolved by name and defaults to HEAD. A missing resource
    /// yields `false` and `204 No Content` yields `true`; any other status is
    /// an [`Error::UnexpectedStatus`]. Every other error propagates.
    pub async fn mutate_as_bool(
        &self,
        resource: impl fmt::Display,
        verb: Option<&str>,
        options: RequestConfig,
    ) -> Result<bool> {
        let path = self.prefix_resource(resource);
        let request = self.request_options(options);

        debug!("{} {path} (as bool)", verb.unwrap_or("HEAD"));
        let result = match verb {
            Some(verb) => self.transport.dispatch(verb, &path, request).await,
            None => self.transport.head(&path, request).await,
        };

        match result {
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
            Ok(response) if response.is_no_content() => Ok(true),
            Ok(response) => Err(Error::UnexpectedStatus {
                path,
                expected: NO_CONTENT,
                actual: response.status,
            }),
        }
    }

    /// PUT as boolean
    pub async fn put_as_bool(
        &self,
        resource: impl fmt::Display,
        options: RequestConfig,
    ) -> Result<bool> {
        self.mutate_as_bool(resource, Some("put"), options).await
    }

    /// DELETE as boolean
    pub async fn delete_as_bool(
        &self,
        resource: impl fmt::Display,
        options: RequestConfig,
    ) -> Result<bool> {
        self.mutate_as_bool(resource, Some("delete"), options).await
    }
}

impl fmt::Debug for ResourceHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandler")
            .field("prefix", &self.prefix)
            .field("converter", &self.converter)
            .field("media", &self.media)
            .field("has_reader", &self.reader.is_some())
            .finish_non_exhaustive()
    }
}

/// Item-level cursor over a page stream
struct Items<'a> {
    pages: PageStream<'a>,
    buffered: std::vec::IntoIter<JsonValue>,
    converter: Box<dyn ConversionStrategy>,
    model: Option<ModelHint>,
    counter: u64,
    limit: Option<u64>,
    done: bool,
}

impl Items<'_> {
    async fn next_item(&mut self) -> Option<Result<Converted>> {
        // Checked before touching the page stream, so a reached limit
        // never triggers another fetch
        if self.done || self.limit.is_some_and(|limit| self.counter >= limit) {
            return None;
        }

        let raw = loop {
            if let Some(raw) = self.buffered.next() {
                break raw;
            }
            match self.pages.next().await {
                Some(Ok(page)) => self.buffered = page.items.into_iter(),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        };

        self.counter += 1;
        self.converter.inject(self.model.clone());
        let converted = self.converter.loads(raw);
        if converted.is_err() {
            self.done = true;
        }
        Some(converted)
    }
}
