//! Read operations that one handler can serve on behalf of another

use super::options::FetchOptions;
use super::resource::{ResourceHandler, ResourceStream};
use crate::convert::{Converted, ModelHint};
use crate::error::Result;
use async_trait::async_trait;

/// Single and paginated reads.
///
/// [`ResourceHandler`] implements this by forwarding to its delegate when one
/// was set with [`ResourceHandler::with_reader`], and by fetching itself
/// otherwise. Delegation chains are followed.
#[async_trait]
pub trait ResourceReader: Send + Sync {
    /// Read a single resource
    async fn read_one(
        &self,
        resource: &str,
        model: Option<ModelHint>,
        options: FetchOptions,
    ) -> Result<Converted>;

    /// Read a paginated collection
    fn read_many<'a>(
        &'a self,
        resource: &str,
        model: Option<ModelHint>,
        limit: Option<i64>,
        options: FetchOptions,
    ) -> ResourceStream<'a>;
}

#[async_trait]
impl ResourceReader for ResourceHandler {
    async fn read_one(
        &self,
        resource: &str,
        model: Option<ModelHint>,
        options: FetchOptions,
    ) -> Result<Converted> {
        match self.delegate() {
            Some(reader) => reader.read_one(resource, model, options).await,
            None => self.fetch_one(resource, model, options).await,
        }
    }

    fn read_many<'a>(
        &'a self,
        resource: &str,
        model: Option<ModelHint>,
        limit: Option<i64>,
        options: FetchOptions,
    ) -> ResourceStream<'a> {
        match self.delegate() {
            Some(reader) => reader.read_many(resource, model, limit, options),
            None => self.fetch_many(resource, model, limit, options),
        }
    }
}
