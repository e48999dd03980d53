//! 导航栈状态机

use crate::cache::NodeLookup;
use crate::traits::ExternalOpener;
use crate::types::ItemId;
use crate::window::LevelWindow;

use super::Level;

/// `descend` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescendOutcome {
    /// 压入了新层
    Pushed,
    /// 焦点节点尚未就绪（待定或失败），栈未变化
    NotReady(ItemId),
    /// 焦点节点没有子节点，栈未变化
    NoChildren,
    /// 顶层为空，栈未变化
    EmptyLevel,
}

/// 供渲染层读取的单层快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSnapshot<'a> {
    pub depth: usize,
    pub items: &'a [ItemId],
    pub active_index: usize,
    /// 与 `items` 等长，`true` 表示该索引需要实体化
    pub materialized: Vec<bool>,
}

/// 导航栈
///
/// 初始化后至少包含根层。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    levels: Vec<Level>,
}

impl NavigationStack {
    /// 以根层 ID 列表创建
    pub fn new(root_items: Vec<ItemId>) -> Self {
        Self {
            levels: vec![Level::new(root_items)],
        }
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, depth: usize) -> Option<&Level> {
        self.levels.get(depth)
    }

    /// 层数
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn root(&self) -> &Level {
        &self.levels[0]
    }

    /// 最后压入的层
    pub fn top(&self) -> &Level {
        let last = self.levels.len() - 1;
        &self.levels[last]
    }

    fn top_mut(&mut self) -> &mut Level {
        let last = self.levels.len() - 1;
        &mut self.levels[last]
    }

    /// 顶层焦点的条目 ID
    pub fn focused_id(&self) -> Option<ItemId> {
        self.top().focused_id()
    }

    /// 在顶层移动焦点
    pub fn move_active(&mut self, delta: isize) -> bool {
        self.top_mut().move_active(delta)
    }

    /// 下钻到焦点节点的子节点
    ///
    /// 只读取已就绪的节点；待定/失败的节点与无子节点的节点都不改变栈。
    /// 待定节点就绪后是否再次下钻由调用方决定。
    pub fn descend(&mut self, nodes: &impl NodeLookup) -> DescendOutcome {
        let Some(id) = self.focused_id() else {
            return DescendOutcome::EmptyLevel;
        };
        let Some(node) = nodes.ready_node(id) else {
            return DescendOutcome::NotReady(id);
        };
        if !node.has_children() {
            return DescendOutcome::NoChildren;
        }

        let children = node.children.clone();
        log::debug!("下钻: {id} -> {} 个子节点", children.len());
        self.levels.push(Level::new(children));
        DescendOutcome::Pushed
    }

    /// 回到根层
    ///
    /// 移除根层以外的所有层（直接折叠到根，而非弹出一层）。
    /// 返回栈是否发生变化。
    pub fn ascend(&mut self) -> bool {
        if self.levels.len() <= 1 {
            return false;
        }
        self.levels.truncate(1);
        true
    }

    /// 激活焦点节点：带链接的 story 交给外部打开
    ///
    /// 返回打开的链接。
    pub fn activate<'a>(
        &self,
        nodes: &'a impl NodeLookup,
        opener: &dyn ExternalOpener,
    ) -> Option<&'a str> {
        let id = self.focused_id()?;
        let url = nodes.ready_node(id)?.external_url()?;
        log::info!("打开外部链接: {url}");
        opener.open_external(url);
        Some(url)
    }

    /// 所有层的只读快照
    pub fn snapshot(&self, window: &LevelWindow) -> Vec<LevelSnapshot<'_>> {
        self.levels
            .iter()
            .enumerate()
            .map(|(depth, level)| LevelSnapshot {
                depth,
                items: level.items(),
                active_index: level.active_index(),
                materialized: window.flags(level),
            })
            .collect()
    }
}
