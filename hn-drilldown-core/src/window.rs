//! 层级窗口
//!
//! 决定一层兄弟节点中哪些索引需要实体化（请求内容并渲染）。
//! 窗口以焦点为中心、半径为 R：`active - R < i < active + R`，
//! 宽度 `2R - 1`。窗口外的索引保留占位，序列长度与每个索引的
//! 布局槽位不随焦点移动而改变。

use std::ops::Range;

use crate::navigation::Level;
use crate::types::ItemId;

/// 默认半径
pub const DEFAULT_RADIUS: usize = 8;

/// 焦点移动前后窗口的差异
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowDiff {
    /// 新进入窗口的索引
    pub entering: Vec<usize>,
    /// 离开窗口的索引
    pub leaving: Vec<usize>,
}

impl WindowDiff {
    pub fn is_empty(&self) -> bool {
        self.entering.is_empty() && self.leaving.is_empty()
    }
}

/// 固定半径的实体化窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelWindow {
    radius: usize,
}

impl Default for LevelWindow {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

impl LevelWindow {
    /// 创建窗口，半径至少为 1
    pub fn new(radius: usize) -> Self {
        Self {
            radius: radius.max(1),
        }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// 索引 `index` 是否需要实体化
    pub fn materialize(&self, active: usize, index: usize) -> bool {
        // i + R > active 且 i < active + R，避免无符号下溢
        index + self.radius > active && index < active.saturating_add(self.radius)
    }

    /// 长度为 `len` 的层中需要实体化的索引区间（半开）
    pub fn range(&self, active: usize, len: usize) -> Range<usize> {
        let start = (active + 1).saturating_sub(self.radius).min(len);
        let end = active.saturating_add(self.radius).min(len);
        start..end.max(start)
    }

    /// 与层等长的实体化标记
    pub fn flags(&self, level: &Level) -> Vec<bool> {
        let active = level.active_index();
        (0..level.len())
            .map(|i| self.materialize(active, i))
            .collect()
    }

    /// 层中需要实体化的条目 ID
    pub fn visible_ids<'a>(&self, level: &'a Level) -> &'a [ItemId] {
        let range = self.range(level.active_index(), level.len());
        &level.items()[range]
    }

    /// 焦点从 `old_active` 移到 `new_active` 后进入与离开窗口的索引
    ///
    /// 两个区间都在的索引不出现在结果中。
    pub fn diff(&self, old_active: usize, new_active: usize, len: usize) -> WindowDiff {
        let old = self.range(old_active, len);
        let new = self.range(new_active, len);
        WindowDiff {
            entering: new.clone().filter(|i| !old.contains(i)).collect(),
            leaving: old.filter(|i| !new.contains(i)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialize_matches_open_interval() {
        for radius in 1..=4 {
            let window = LevelWindow::new(radius);
            for active in 0..12 {
                for i in 0..20 {
                    let expected = (active as isize - radius as isize) < i as isize
                        && (i as isize) < (active + radius) as isize;
                    assert_eq!(
                        window.materialize(active, i),
                        expected,
                        "radius={radius} active={active} i={i}"
                    );
                }
            }
        }
    }

    #[test]
    fn window_width_is_two_r_minus_one() {
        let window = LevelWindow::new(8);
        assert_eq!(window.range(20, 100).len(), 15);
        assert_eq!(window.range(20, 100), 13..28);
    }

    #[test]
    fn range_is_clamped_at_edges() {
        let window = LevelWindow::new(3);
        assert_eq!(window.range(0, 10), 0..3);
        assert_eq!(window.range(9, 10), 7..10);
        assert_eq!(window.range(0, 0), 0..0);
        assert_eq!(window.range(1, 2), 0..2);
    }

    #[test]
    fn radius_one_only_materializes_focus() {
        let window = LevelWindow::new(0);
        assert_eq!(window.radius(), 1);
        assert_eq!(window.range(4, 10), 4..5);
    }

    #[test]
    fn flags_keep_level_length() {
        let mut level = Level::new((100..110).collect());
        let window = LevelWindow::new(2);
        for _ in 0..12 {
            let flags = window.flags(&level);
            assert_eq!(flags.len(), level.len());
            assert_eq!(flags.iter().filter(|f| **f).count(), window.visible_ids(&level).len());
            level.move_active(1);
        }
    }

    #[test]
    fn visible_ids_follow_focus() {
        let mut level = Level::new((100..110).collect());
        let window = LevelWindow::new(2);
        assert_eq!(window.visible_ids(&level), &[100, 101]);
        level.move_active(5);
        assert_eq!(window.visible_ids(&level), &[104, 105, 106]);
    }

    #[test]
    fn diff_reports_only_boundary_changes() {
        let window = LevelWindow::new(3);
        let diff = window.diff(5, 6, 20);
        assert_eq!(diff.entering, vec![8]);
        assert_eq!(diff.leaving, vec![3]);

        assert!(window.diff(5, 5, 20).is_empty());

        let jump = window.diff(0, 10, 20);
        assert_eq!(jump.entering, vec![8, 9, 10, 11, 12]);
        assert_eq!(jump.leaving, vec![0, 1, 2]);
    }
}
