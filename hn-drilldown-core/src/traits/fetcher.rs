//! Node fetching abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{ItemId, Node};

/// Node fetcher Trait
///
/// Supplies one node per call. Implementations own their transport policy
/// (timeouts, connection reuse); callers never retry on their own.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch and convert a single node
    ///
    /// # Errors
    /// `NotFound`, `MalformedResponse` or a network-class error.
    async fn fetch_node(&self, id: ItemId) -> CoreResult<Node>;
}

/// Top-level id list Trait
///
/// Invoked once at startup to build the root level.
#[async_trait]
pub trait TopLevelIdsProvider: Send + Sync {
    /// Ordered ids of the root level
    async fn fetch_top_ids(&self) -> CoreResult<Vec<ItemId>>;
}
