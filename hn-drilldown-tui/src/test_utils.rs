//! 测试辅助模块
//!
//! 提供预置节点的获取器、记录型打开器与测试用 App 工厂。

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use chrono::DateTime;
use hn_drilldown_core::{
    ContentCache, CoreError, CoreResult, ExternalOpener, Fetcher, ItemId, Node, NodeKind,
};
use tokio::runtime::Runtime;

use crate::backend::AppConfig;
use crate::model::App;

/// 测试共用的多线程运行时
pub fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().expect("test runtime"))
}

// ===== 节点工厂 =====

fn node(id: ItemId, kind: NodeKind, children: &[ItemId]) -> Node {
    Node {
        id,
        kind,
        author: Some("pg".to_string()),
        created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
        text: None,
        children: children.to_vec(),
        deleted: false,
        dead: false,
    }
}

pub fn story(id: ItemId, url: Option<&str>, children: &[ItemId]) -> Node {
    node(
        id,
        NodeKind::Story {
            title: format!("Story {id}"),
            url: url.map(str::to_string),
            score: 42,
            descendants: children.len() as u64,
        },
        children,
    )
}

pub fn comment(id: ItemId, parent: ItemId, children: &[ItemId]) -> Node {
    let mut node = node(id, NodeKind::Comment { parent }, children);
    node.text = Some(format!("<p>reply {id}</p>"));
    node
}

// ===== 获取器 =====

/// 按 ID 返回预置节点的获取器
///
/// 未登记的 ID 返回 `NotFound`，挂起的 ID 永不完成。
#[derive(Default)]
pub struct StubFetcher {
    nodes: HashMap<ItemId, Node>,
    hung: HashSet<ItemId>,
}

impl StubFetcher {
    pub fn with_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|n| (n.id, n)).collect(),
            hung: HashSet::new(),
        }
    }

    pub fn with_hung(mut self, id: ItemId) -> Self {
        self.hung.insert(id);
        self
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch_node(&self, id: ItemId) -> CoreResult<Node> {
        if self.hung.contains(&id) {
            std::future::pending::<()>().await;
        }
        self.nodes.get(&id).cloned().ok_or(CoreError::NotFound(id))
    }
}

// ===== 打开器 =====

/// 记录打开过的链接
#[derive(Clone, Default)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalOpener for RecordingOpener {
    fn open_external(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

// ===== App 工厂 =====

/// 无任何节点的 App，根层尚未加载
pub fn test_app() -> App {
    app_with(StubFetcher::default()).0
}

/// 使用给定获取器的 App，返回 App 与其打开器句柄
pub fn app_with(fetcher: StubFetcher) -> (App, RecordingOpener) {
    let opener = RecordingOpener::default();
    let cache = ContentCache::new(Arc::new(fetcher), runtime().handle().clone());
    let mut app = App::new(&AppConfig::default(), cache, Box::new(opener.clone()));
    app.viewport.resize_terminal(120, 42);
    (app, opener)
}

/// 等待缓存中所有进行中的获取完成，返回完成的 ID
pub fn settle(app: &mut App) -> Vec<ItemId> {
    let cache = &mut app.browse.cache;
    runtime().block_on(async {
        let mut resolved = Vec::new();
        while let Some(id) = cache.next_completion().await {
            resolved.push(id);
        }
        resolved
    })
}

/// 等待某个条目完成（其他条目可以仍在进行）
pub fn wait_for(app: &mut App, id: ItemId) -> Vec<ItemId> {
    let cache = &mut app.browse.cache;
    runtime().block_on(async {
        let mut resolved = Vec::new();
        while let Some(done) = cache.next_completion().await {
            resolved.push(done);
            if done == id {
                break;
            }
        }
        resolved
    })
}
