//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 层级区 + 状态栏 + 弹窗
//!         mod components;         // 层级列、条目、状态栏、弹窗
//!         pub mod theme;          // 颜色与样式
//!
//!
//!     ┌──────────────────────────── 标题栏 ────────────────────────────┐
//!     ├─────────────┬─────────────┬─────────────┐                      │
//!     │  depth 0    │  depth 1    │  depth 2    │  ← 水平偏移使顶层居中 │
//!     │  ▒ 焦点路径 │  ▒ 焦点路径 │  █ 焦点     │                      │
//!     │             │             │             │  ↑ 每列独立的垂直偏移 │
//!     ├─────────────┴─────────────┴─────────────┘                      │
//!     └──────────────────────────── 状态栏 ────────────────────────────┘
//!
//!     偏移在渲染时按当前时刻采样（见 model/state/viewport.rs），
//!     因此过渡进行中的每一帧都会落在缓动曲线的不同位置。

mod components;
mod layout;
pub mod theme;

use std::time::Instant;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame, Instant::now());
}
