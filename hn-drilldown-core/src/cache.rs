//! 内容缓存
//!
//! 以条目 ID 为键保存获取结果。每个 ID 在会话内至多发起一次获取
//! （显式 [`ContentCache::retry`] 除外），结果永久保留，不做淘汰。
//!
//! 获取在 tokio 运行时上异步执行，完成结果经由 mpsc 通道回送，
//! 再由缓存的持有者在自己的线程上调用 [`ContentCache::drain_completions`]
//! 写入条目。因此每个条目只会被它自己那次获取的结果写入一次，
//! 不存在并发写入。

use std::collections::HashMap;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{CoreError, CoreResult, ErrorInfo};
use crate::traits::Fetcher;
use crate::types::{ItemId, Node};

/// 条目状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    /// 已发起获取，尚未完成
    Pending,
    /// 获取成功
    Ready(Arc<Node>),
    /// 获取失败
    Failed(ErrorInfo),
}

/// 缓存条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub id: ItemId,
    pub status: CacheStatus,
}

impl CacheEntry {
    fn pending(id: ItemId) -> Self {
        Self {
            id,
            status: CacheStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, CacheStatus::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, CacheStatus::Failed(_))
    }

    /// 已就绪的节点
    pub fn node(&self) -> Option<&Node> {
        match &self.status {
            CacheStatus::Ready(node) => Some(node),
            CacheStatus::Pending | CacheStatus::Failed(_) => None,
        }
    }

    /// 失败信息
    pub fn error(&self) -> Option<&ErrorInfo> {
        match &self.status {
            CacheStatus::Failed(info) => Some(info),
            CacheStatus::Pending | CacheStatus::Ready(_) => None,
        }
    }
}

/// 只读节点查询
///
/// 导航层只通过它读取已就绪的节点，待定与失败一律视为“不可用”。
pub trait NodeLookup {
    fn ready_node(&self, id: ItemId) -> Option<&Node>;
}

impl NodeLookup for HashMap<ItemId, Node> {
    fn ready_node(&self, id: ItemId) -> Option<&Node> {
        self.get(&id)
    }
}

/// 一次获取的完成结果
struct Completion {
    id: ItemId,
    result: CoreResult<Node>,
}

/// 内容缓存
pub struct ContentCache {
    entries: HashMap<ItemId, CacheEntry>,
    fetcher: Arc<dyn Fetcher>,
    runtime: Handle,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
    /// 已发起的获取次数
    fetches_started: usize,
}

impl ContentCache {
    /// 创建缓存，获取任务在给定运行时上执行
    pub fn new(fetcher: Arc<dyn Fetcher>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            entries: HashMap::new(),
            fetcher,
            runtime,
            tx,
            rx,
            fetches_started: 0,
        }
    }

    /// 使用当前上下文的运行时创建缓存
    pub fn with_current_runtime(fetcher: Arc<dyn Fetcher>) -> CoreResult<Self> {
        let runtime =
            Handle::try_current().map_err(|e| CoreError::RuntimeUnavailable(e.to_string()))?;
        Ok(Self::new(fetcher, runtime))
    }

    /// 请求条目
    ///
    /// 首次请求时创建待定条目并发起获取，立即返回；之后的请求
    /// 直接返回已有条目，不再发起获取。
    pub fn request(&mut self, id: ItemId) -> CacheEntry {
        if let Some(entry) = self.entries.get(&id) {
            return entry.clone();
        }

        let entry = CacheEntry::pending(id);
        self.entries.insert(id, entry.clone());
        self.spawn_fetch(id);
        entry
    }

    /// 非阻塞读取，不会发起获取
    pub fn peek(&self, id: ItemId) -> Option<&CacheEntry> {
        self.entries.get(&id)
    }

    /// 显式重新请求失败的条目
    ///
    /// 仅对失败条目生效：重置为待定并再次获取。返回是否发起了获取。
    pub fn retry(&mut self, id: ItemId) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        if !entry.is_failed() {
            return false;
        }

        log::info!("重新请求条目 {id}");
        entry.status = CacheStatus::Pending;
        self.spawn_fetch(id);
        true
    }

    /// 写入所有已完成的获取，返回状态发生变化的条目 ID
    pub fn drain_completions(&mut self) -> Vec<ItemId> {
        let mut resolved = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            if let Some(id) = self.apply(completion) {
                resolved.push(id);
            }
        }
        resolved
    }

    /// 等待下一次获取完成并写入
    ///
    /// 没有进行中的获取时返回 `None`。
    pub async fn next_completion(&mut self) -> Option<ItemId> {
        while self.in_flight() > 0 {
            let completion = self.rx.recv().await?;
            if let Some(id) = self.apply(completion) {
                return Some(id);
            }
        }
        None
    }

    /// 进行中的获取数量
    pub fn in_flight(&self) -> usize {
        self.entries.values().filter(|e| e.is_pending()).count()
    }

    /// 已发起的获取次数（包括重试）
    pub fn fetches_started(&self) -> usize {
        self.fetches_started
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn spawn_fetch(&mut self, id: ItemId) {
        self.fetches_started += 1;
        log::debug!("获取条目 {id}");

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = fetcher.fetch_node(id).await;
            // 缓存已释放时接收端关闭，结果直接丢弃
            let _ = tx.send(Completion { id, result });
        });
    }

    fn apply(&mut self, completion: Completion) -> Option<ItemId> {
        let Completion { id, result } = completion;
        let Some(entry) = self.entries.get_mut(&id) else {
            log::warn!("收到未登记条目 {id} 的获取结果，忽略");
            return None;
        };
        if !entry.is_pending() {
            log::warn!("条目 {id} 已完成，忽略重复结果");
            return None;
        }

        entry.status = match result {
            Ok(node) => CacheStatus::Ready(Arc::new(node)),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("条目 {id} 获取失败: {e}");
                } else {
                    log::error!("条目 {id} 获取失败: {e}");
                }
                CacheStatus::Failed(ErrorInfo::from(&e))
            }
        };
        Some(id)
    }
}

impl NodeLookup for ContentCache {
    fn ready_node(&self, id: ItemId) -> Option<&Node> {
        self.entries.get(&id).and_then(CacheEntry::node)
    }
}
