// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Resource Mediator
//!
//! Resource handlers for REST APIs that paginate with `Link` headers and
//! negotiate representations through vendor media types.
//!
//! ## Features
//!
//! - **Path prefixing**: handlers scoped to `repos/{owner}/{repo}` and below
//! - **Media negotiation**: `application/vnd.github.beta.{raw,text,html,full}+json`
//! - **Lazy pagination**: collections are streams; pages are fetched on demand
//!   and never past the requested limit
//! - **Pluggable conversion**: models by default, raw JSON on request
//! - **Boolean mutations**: `204 No Content` / `404 Not Found` as `true` / `false`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use resource_mediator::{load_config_from_str, FetchOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = load_config_from_str("base_url: https://api.github.com\nprefix: repos/rust-lang/rust")?
//!         .resource_handler()?;
//!
//!     let issue = handler.fetch_one("issues/1", Some("Issue".into()), FetchOptions::new()).await?;
//!
//!     let mut issues = handler.fetch_many("issues", None, Some(50), FetchOptions::new());
//!     while let Some(issue) = issues.next().await {
//!         println!("{}", issue?.to_json());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       ResourceHandler                        │
//! │  fetch_one  fetch_many  create  mutate_as_bool  read_*       │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┼──────────────┬─────────────────┐
//! │    Media     │   Convert    │  Pagination  │      HTTP       │
//! ├──────────────┼──────────────┼──────────────┼─────────────────┤
//! │ Accept types │ Modelizer    │ Link header  │ Transport trait │
//! │              │ Rawlizer     │ Next URL     │ reqwest client  │
//! │              │              │ Page number  │                 │
//! └──────────────┴──────────────┴──────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Vendor media type negotiation
pub mod media;

/// Transport abstraction and reqwest client
pub mod http;

/// Payload conversion strategies
pub mod convert;

/// Pagination strategies and page walking
pub mod pagination;

/// The resource handler
pub mod handler;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, ClientConfig};
pub use convert::{Converted, ConverterType, Model, ModelHint, Modelizer, Rawlizer};
pub use handler::{FetchOptions, ResourceHandler, ResourceReader, ResourceStream};
pub use http::{HttpClient, RequestConfig, Transport};
pub use media::ContentNegotiator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
