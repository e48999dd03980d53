//! 浏览状态：导航栈 + 内容缓存 + 实体化窗口

use hn_drilldown_core::{CacheEntry, ContentCache, ErrorInfo, ItemId, LevelWindow, NavigationStack};

/// 推迟的下钻
///
/// 在待定节点上按 → 时记录，节点就绪且焦点未移动时再次执行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredDescend {
    /// 发起时顶层的索引（`depth() - 1`）
    pub depth: usize,
    pub id: ItemId,
}

/// 浏览状态
pub struct BrowseState {
    pub cache: ContentCache,
    /// 根层未加载时为 `None`
    pub stack: Option<NavigationStack>,
    pub window: LevelWindow,
    pub deferred: Option<DeferredDescend>,
    /// 根层加载失败的原因
    pub root_error: Option<ErrorInfo>,
    /// 主循环需要重新加载根层
    pub reload_root: bool,
}

impl BrowseState {
    pub fn new(cache: ContentCache, window: LevelWindow) -> Self {
        Self {
            cache,
            stack: None,
            window,
            deferred: None,
            root_error: None,
            reload_root: false,
        }
    }

    /// 根层是否仍在加载
    pub fn is_loading_root(&self) -> bool {
        self.stack.is_none() && self.root_error.is_none()
    }

    /// 顶层焦点的条目
    pub fn focused_entry(&self) -> Option<&CacheEntry> {
        let id = self.stack.as_ref()?.focused_id()?;
        self.cache.peek(id)
    }

    /// 请求某层窗口内的所有条目
    pub fn request_window(&mut self, depth: usize) {
        let Some(level) = self.stack.as_ref().and_then(|s| s.level(depth)) else {
            return;
        };
        let ids = self.window.visible_ids(level).to_vec();
        let before = self.cache.fetches_started();
        for id in ids {
            self.cache.request(id);
        }
        log::debug!(
            "第 {depth} 层窗口发起 {} 个请求",
            self.cache.fetches_started() - before
        );
    }

    /// 焦点移动后请求进入窗口的条目
    ///
    /// 离开窗口的条目不取消获取，结果照常写入缓存。
    pub fn request_entering(&mut self, old_active: usize) {
        let Some(level) = self.stack.as_ref().map(NavigationStack::top) else {
            return;
        };
        let diff = self
            .window
            .diff(old_active, level.active_index(), level.len());
        if !diff.leaving.is_empty() {
            log::trace!("{} 个条目离开窗口", diff.leaving.len());
        }
        let ids: Vec<ItemId> = diff
            .entering
            .iter()
            .filter_map(|&i| level.items().get(i).copied())
            .collect();
        for id in ids {
            self.cache.request(id);
        }
    }
}
