//! # hn-drilldown-provider
//!
//! A small, read-only client for the [Hacker News Firebase API](https://github.com/HackerNews/API).
//!
//! The crate only knows about the remote wire format: feed id lists and raw
//! item records. Turning a [`RawItem`] into a typed node, caching, and
//! navigation all live in `hn-drilldown-core`.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for static builds and cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hn_drilldown_provider::{ContentProvider, Feed, HackerNewsProvider, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = HackerNewsProvider::new(ProviderConfig::default())?;
//!
//!     // 1. Top-level ids of a feed, ranked by the server
//!     let ids = provider.fetch_feed(Feed::Top).await?;
//!
//!     // 2. One raw item
//!     if let Some(id) = ids.first() {
//!         let item = provider.fetch_item(*id).await?;
//!         println!("{:?} by {:?}", item.title, item.by);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Items that
//! the API answers with `null` are reported as
//! [`ItemNotFound`](ProviderError::ItemNotFound); bodies that do not match the
//! item schema are [`ParseError`](ProviderError::ParseError).
//!
//! No request is retried by this crate. Each request carries the timeout
//! configured in [`ProviderConfig`].

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};
pub use providers::HackerNewsProvider;
pub use traits::ContentProvider;
pub use types::{DEFAULT_BASE_URL, Feed, ItemId, ProviderConfig, RawItem};
pub use utils::log_sanitizer::truncate_for_log;
