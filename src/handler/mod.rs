//! Resource handler module
//!
//! [`ResourceHandler`] turns resource-level calls (fetch one, fetch many,
//! create, boolean mutations) into transport requests:
//!
//! 1. The resource is joined onto the handler prefix
//! 2. The negotiated `Accept` header is added
//! 3. A converter is resolved for the call and fed the response
//!
//! Collections are walked lazily through a [`PageWalker`](crate::pagination::PageWalker).

mod options;
mod reader;
mod resource;

pub use options::{normalize_limit, FetchOptions};
pub use reader::ResourceReader;
pub use resource::{ResourceHandler, ResourceStream};
