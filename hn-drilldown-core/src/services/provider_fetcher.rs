//! 远端内容获取服务

use std::sync::Arc;

use async_trait::async_trait;
use hn_drilldown_provider::{ContentProvider, Feed, ProviderError};

use crate::error::{CoreError, CoreResult};
use crate::traits::{Fetcher, TopLevelIdsProvider};
use crate::types::{ItemId, Node};

/// 根层默认条目上限
pub const DEFAULT_TOP_LIMIT: usize = 40;

/// 基于 [`ContentProvider`] 的获取服务
///
/// 把原始条目转换为 [`Node`]，并把根层 ID 列表截断到上限。
pub struct ProviderFetcher {
    provider: Arc<dyn ContentProvider>,
    feed: Feed,
    limit: usize,
}

impl ProviderFetcher {
    /// 创建获取服务实例
    #[must_use]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            feed: Feed::default(),
            limit: DEFAULT_TOP_LIMIT,
        }
    }

    /// 指定根层来源
    #[must_use]
    pub fn with_feed(mut self, feed: Feed) -> Self {
        self.feed = feed;
        self
    }

    /// 指定根层条目上限（至少为 1）
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn feed(&self) -> Feed {
        self.feed
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[async_trait]
impl Fetcher for ProviderFetcher {
    async fn fetch_node(&self, id: ItemId) -> CoreResult<Node> {
        let raw = match self.provider.fetch_item(id).await {
            Ok(raw) => raw,
            Err(ProviderError::ItemNotFound { item_id, .. }) => {
                return Err(CoreError::NotFound(item_id));
            }
            Err(e) => return Err(CoreError::Provider(e)),
        };
        Node::from_raw(raw)
    }
}

#[async_trait]
impl TopLevelIdsProvider for ProviderFetcher {
    async fn fetch_top_ids(&self) -> CoreResult<Vec<ItemId>> {
        let mut ids = self.provider.fetch_feed(self.feed).await?;
        let total = ids.len();
        ids.truncate(self.limit);
        log::info!(
            "[{}] 根层加载完成: {:?} 共 {total} 条，保留 {}",
            self.provider.id(),
            self.feed,
            ids.len()
        );
        Ok(ids)
    }
}
