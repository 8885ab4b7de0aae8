//! Pagination module
//!
//! Supports: Link Header, Next URL, Page Number, single page
//!
//! # Overview
//!
//! A [`Paginator`] decides, response by response, where the next page lives.
//! A [`PageWalker`] turns that into a lazy stream of [`Page`]s: each page is
//! fetched only when the consumer polls for it, and dropping the stream stops
//! the walk.

mod strategies;
mod types;
mod walker;

pub use strategies::{
    parse_link_header, LinkHeaderPaginator, NextUrlPaginator, NoPaginator, PageNumberPaginator,
};
pub use types::{
    lookup_path, NextPage, Page, PageStream, PageWalker, PaginationConfig, PaginationState,
    Paginator,
};
pub use walker::PaginatorWalker;
