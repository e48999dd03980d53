use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Feed, ItemId, RawItem};

/// 内容提供者 Trait
///
/// 只读：获取榜单 ID 列表与单个条目。不做缓存，不做重试。
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// 提供者标识符（用于日志与错误）
    fn id(&self) -> &'static str;

    /// 获取榜单中的条目 ID（服务端排序）
    async fn fetch_feed(&self, feed: Feed) -> Result<Vec<ItemId>>;

    /// 获取单个条目
    ///
    /// 接口返回 `null` 时为 [`ProviderError::ItemNotFound`](crate::ProviderError::ItemNotFound)。
    async fn fetch_item(&self, id: ItemId) -> Result<RawItem>;
}
