//! 导航层

use crate::types::ItemId;

/// 导航层：兄弟节点列表 + 焦点索引
///
/// 非空时 `active ∈ [0, len - 1]`；空层的 `active` 恒为 0。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    items: Vec<ItemId>,
    active: usize,
}

impl Level {
    /// 创建新层，焦点位于第一项
    pub fn new(items: Vec<ItemId>) -> Self {
        Self { items, active: 0 }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 当前焦点的条目 ID
    pub fn focused_id(&self) -> Option<ItemId> {
        self.items.get(self.active).copied()
    }

    /// 移动焦点，夹在 `[0, len - 1]` 内，不回绕
    ///
    /// 返回焦点是否发生变化。
    pub fn move_active(&mut self, delta: isize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let last = self.items.len() - 1;
        let target = if delta.is_negative() {
            self.active.saturating_sub(delta.unsigned_abs())
        } else {
            self.active.saturating_add(delta.unsigned_abs()).min(last)
        };

        let changed = target != self.active;
        self.active = target;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_are_clamped_not_wrapped() {
        let mut level = Level::new(vec![1, 2, 3, 4, 5]);

        assert!(!level.move_active(-1));
        assert_eq!(level.active_index(), 0);

        for _ in 0..4 {
            assert!(level.move_active(1));
        }
        assert_eq!(level.active_index(), 4);

        assert!(!level.move_active(1));
        assert_eq!(level.active_index(), 4);
        assert_eq!(level.focused_id(), Some(5));
    }

    #[test]
    fn large_deltas_saturate() {
        let mut level = Level::new(vec![10, 11, 12]);
        level.move_active(isize::MAX);
        assert_eq!(level.active_index(), 2);
        level.move_active(isize::MIN);
        assert_eq!(level.active_index(), 0);
    }

    #[test]
    fn empty_level_is_inert() {
        let mut level = Level::new(Vec::new());
        assert!(!level.move_active(1));
        assert!(!level.move_active(-1));
        assert_eq!(level.active_index(), 0);
        assert_eq!(level.focused_id(), None);
    }

    #[test]
    fn arbitrary_move_sequences_stay_in_bounds() {
        let mut level = Level::new((0..7).collect());
        let deltas = [3, -1, 9, -20, 2, 2, 2, -3, 1, 100, -1];
        for delta in deltas {
            level.move_active(delta);
            assert!(level.active_index() < level.len());
        }
    }
}
