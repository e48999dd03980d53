//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;
use hn_drilldown_provider::{ContentProvider, Feed, ProviderError, RawItem};

use crate::error::{CoreError, CoreResult};
use crate::traits::{ExternalOpener, Fetcher};
use crate::types::{ItemId, Node, NodeKind};

// ===== 节点工厂 =====

fn node(id: ItemId, kind: NodeKind, children: &[ItemId]) -> Node {
    Node {
        id,
        kind,
        author: Some("tester".to_string()),
        created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
        text: None,
        children: children.to_vec(),
        deleted: false,
        dead: false,
    }
}

/// 无链接的 story
pub fn story(id: ItemId, children: &[ItemId]) -> Node {
    node(
        id,
        NodeKind::Story {
            title: format!("Story {id}"),
            url: None,
            score: 1,
            descendants: children.len() as u64,
        },
        children,
    )
}

/// 带链接的 story，无子节点
pub fn story_with_url(id: ItemId, url: &str) -> Node {
    node(
        id,
        NodeKind::Story {
            title: format!("Story {id}"),
            url: Some(url.to_string()),
            score: 1,
            descendants: 0,
        },
        &[],
    )
}

pub fn comment(id: ItemId, parent: ItemId, children: &[ItemId]) -> Node {
    let mut node = node(id, NodeKind::Comment { parent }, children);
    node.text = Some(format!("comment {id}"));
    node
}

// ===== MockFetcher =====

type ErrorFactory = Box<dyn Fn() -> CoreError + Send + Sync>;

/// 按 ID 返回预置结果的获取器
///
/// 未登记的 ID 返回 `NotFound`；登记为挂起的 ID 永不完成。
pub struct MockFetcher {
    nodes: HashMap<ItemId, Node>,
    failures: HashMap<ItemId, ErrorFactory>,
    hung: HashSet<ItemId>,
    calls: Mutex<Vec<ItemId>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            failures: HashMap::new(),
            hung: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.insert(node.id, node);
        self
    }

    pub fn with_failure(
        mut self,
        id: ItemId,
        error: impl Fn() -> CoreError + Send + Sync + 'static,
    ) -> Self {
        self.failures.insert(id, Box::new(error));
        self
    }

    pub fn with_hung(mut self, id: ItemId) -> Self {
        self.hung.insert(id);
        self
    }

    /// 获取调用总次数
    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, id: ItemId) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| **c == id)
            .count()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_node(&self, id: ItemId) -> CoreResult<Node> {
        self.calls.lock().unwrap().push(id);

        if self.hung.contains(&id) {
            std::future::pending::<()>().await;
        }
        if let Some(make_error) = self.failures.get(&id) {
            return Err(make_error());
        }
        self.nodes.get(&id).cloned().ok_or(CoreError::NotFound(id))
    }
}

// ===== MockOpener =====

#[derive(Default)]
pub struct MockOpener {
    opened: Mutex<Vec<String>>,
}

impl MockOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ExternalOpener for MockOpener {
    fn open_external(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

// ===== MockContentProvider =====

/// 内存中的内容源
pub struct MockContentProvider {
    feeds: HashMap<Feed, Vec<ItemId>>,
    items: HashMap<ItemId, RawItem>,
    errors: HashMap<ItemId, ProviderError>,
}

impl MockContentProvider {
    pub fn new() -> Self {
        Self {
            feeds: HashMap::new(),
            items: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_feed(mut self, feed: Feed, ids: Vec<ItemId>) -> Self {
        self.feeds.insert(feed, ids);
        self
    }

    pub fn with_item(mut self, item: RawItem) -> Self {
        self.items.insert(item.id, item);
        self
    }

    pub fn with_error(mut self, id: ItemId, error: ProviderError) -> Self {
        self.errors.insert(id, error);
        self
    }
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn fetch_feed(&self, feed: Feed) -> hn_drilldown_provider::Result<Vec<ItemId>> {
        Ok(self.feeds.get(&feed).cloned().unwrap_or_default())
    }

    async fn fetch_item(&self, id: ItemId) -> hn_drilldown_provider::Result<RawItem> {
        if let Some(error) = self.errors.get(&id) {
            return Err(error.clone());
        }
        self.items
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::ItemNotFound {
                provider: "mock".to_string(),
                item_id: id,
            })
    }
}
