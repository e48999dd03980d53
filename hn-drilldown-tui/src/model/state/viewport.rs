//! 视口状态
//!
//! 保存层级区域尺寸与每层的滚动过渡。目标偏移全部由
//! `hn_drilldown_core::viewport` 的纯函数计算，这里只负责在
//! 模型变化（`sync`）或尺寸变化（`relayout`）时重新计算。

use std::time::Instant;

use hn_drilldown_core::{center_item, center_level, NavigationStack, Transition};

/// 标题栏高度
pub const TITLE_HEIGHT: u16 = 1;
/// 状态栏高度
pub const STATUS_HEIGHT: u16 = 1;

/// 视口状态
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// 层级区域宽度
    width: u16,
    /// 层级区域高度（含列边框）
    height: u16,
    column_width: u16,
    item_height: u16,
    /// 每层的垂直偏移，下标为层深度
    vertical: Vec<Transition>,
    /// 整个栈的水平偏移
    horizontal: Transition,
}

impl ViewportState {
    pub fn new(column_width: u16, item_height: u16, now: Instant) -> Self {
        Self {
            width: 0,
            height: 0,
            column_width,
            item_height,
            vertical: Vec::new(),
            horizontal: Transition::settled(0, now),
        }
    }

    pub fn column_width(&self) -> u16 {
        self.column_width
    }

    pub fn item_height(&self) -> u16 {
        self.item_height
    }

    /// 终端尺寸变化：扣除标题栏与状态栏得到层级区域
    pub fn resize_terminal(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height.saturating_sub(TITLE_HEIGHT + STATUS_HEIGHT);
    }

    /// 列内可用高度（去掉上下边框）
    fn column_inner_height(&self) -> i32 {
        i32::from(self.height.saturating_sub(2))
    }

    /// 焦点位于 `active` 时该层的目标垂直偏移
    pub fn item_target(&self, active: usize) -> i32 {
        let item_height = i32::from(self.item_height);
        let active = i32::try_from(active).unwrap_or(i32::MAX / item_height.max(1));
        center_item(
            self.column_inner_height(),
            item_height,
            active.saturating_mul(item_height),
        )
    }

    /// 栈深度为 `depth` 时的目标水平偏移
    pub fn level_target(&self, depth: usize) -> i32 {
        let column_width = i32::from(self.column_width);
        let depth = i32::try_from(depth).unwrap_or(i32::MAX / column_width.max(1));
        center_level(
            depth.saturating_mul(column_width),
            column_width,
            i32::from(self.width),
        )
    }

    /// 模型变化后更新目标，已有层以缓动过渡，新压入的层直接就位
    pub fn sync(&mut self, stack: &NavigationStack, now: Instant) {
        self.vertical.truncate(stack.depth());
        for (depth, level) in stack.levels().iter().enumerate() {
            let target = self.item_target(level.active_index());
            match self.vertical.get_mut(depth) {
                Some(transition) => transition.retarget(target, now),
                None => self.vertical.push(Transition::settled(target, now)),
            }
        }
        let target = self.level_target(stack.depth());
        self.horizontal.retarget(target, now);
    }

    /// 尺寸变化后按当前状态重新计算，不做过渡
    pub fn relayout(&mut self, stack: &NavigationStack, now: Instant) {
        self.vertical.truncate(stack.depth());
        for (depth, level) in stack.levels().iter().enumerate() {
            let target = self.item_target(level.active_index());
            match self.vertical.get_mut(depth) {
                Some(transition) => transition.jump(target, now),
                None => self.vertical.push(Transition::settled(target, now)),
            }
        }
        let target = self.level_target(stack.depth());
        self.horizontal.jump(target, now);
    }

    /// 某层在 `now` 时刻的垂直偏移
    pub fn vertical_offset(&self, depth: usize, now: Instant) -> i32 {
        self.vertical
            .get(depth)
            .map_or(0, |transition| transition.value_at(now))
    }

    /// `now` 时刻的水平偏移
    pub fn horizontal_offset(&self, now: Instant) -> i32 {
        self.horizontal.value_at(now)
    }

    /// 是否有过渡仍在进行
    pub fn is_animating(&self, now: Instant) -> bool {
        self.horizontal.is_animating(now) || self.vertical.iter().any(|t| t.is_animating(now))
    }
}
