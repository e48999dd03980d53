//! hn-drilldown Core Library
//!
//! Platform-independent core of the drill-down browser:
//! - Content cache (fetch once, memoize for the session)
//! - Navigation stack (descend / collapse-to-root / move)
//! - Level window (which siblings around the focus are materialized)
//! - Viewport geometry (pure centering math and eased transitions)
//!
//! Remote access is abstracted through the [`Fetcher`] and
//! [`TopLevelIdsProvider`] traits; [`services::ProviderFetcher`] adapts an
//! `hn-drilldown-provider` client to both.

pub mod cache;
pub mod error;
pub mod navigation;
pub mod services;
pub mod traits;
pub mod types;
pub mod viewport;
pub mod window;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cache::{CacheEntry, CacheStatus, ContentCache, NodeLookup};
pub use error::{CoreError, CoreResult, ErrorInfo, ErrorKind};
pub use navigation::{DescendOutcome, Level, LevelSnapshot, NavigationStack};
pub use traits::{ExternalOpener, Fetcher, TopLevelIdsProvider};
pub use types::{ItemId, Node, NodeKind};
pub use viewport::{center_item, center_level, Transition, TRANSITION_DURATION};
pub use window::{LevelWindow, WindowDiff};
