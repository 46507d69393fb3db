/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # BuiltWith Client
//!
//! Async client for two BuiltWith endpoints:
//!
//! - **Lists API**: websites using a given technology, paginated through the
//!   `NextOffset` continuation token.
//! - **Keywords API**: keywords for up to 16 root domains per call, with a
//!   batching helper for longer domain lists.
//!
//! ## Example
//!
//! ```ignore
//! use builtwith_client::prelude::*;
//!
//! let config = Config::new();
//! let lists = ListsClient::new(config)?;
//!
//! let request = TechListRequest::new("Shopify").with_country("US");
//! let mut pages = lists.pages(&request, Some(3));
//! while let Some(page) = pages.next_page().await? {
//!     for site in page.results() {
//!         println!("{:?}", site.normalize().domain);
//!     }
//! }
//! ```

/// Application layer: configuration and API services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request, response and transport models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Normalized result models
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Crate version as declared in `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
