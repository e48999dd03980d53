//! 层级列组件
//!
//! 每层一列，列宽固定，从左到右按深度排列。列的位置与列内条目的
//! 位置都由视口偏移决定：
//!
//!     列 x = 区域左边 + 水平偏移 + depth × 列宽
//!     条目 y = 列内顶部 + 该层垂直偏移 + index × 条目高度
//!
//! 超出区域的部分被裁掉；条目被裁掉的行与列通过 `scroll` 跳过。

use std::time::Instant;

use hn_drilldown_core::LevelSnapshot;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::item::{self, Highlight};
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染全部层级
pub fn render(app: &App, frame: &mut Frame, area: Rect, now: Instant) {
    let Some(stack) = &app.browse.stack else {
        render_root_state(app, frame, area);
        return;
    };

    let column_width = i32::from(app.viewport.column_width());
    let horizontal = app.viewport.horizontal_offset(now);
    let top = stack.depth() - 1;

    for snapshot in stack.snapshot(&app.browse.window) {
        let depth = i32::try_from(snapshot.depth).unwrap_or(i32::MAX);
        let x = i32::from(area.x) + horizontal + depth.saturating_mul(column_width);
        let Some((column, _)) = clip(x, i32::from(area.y), column_width, i32::from(area.height), area)
        else {
            continue;
        };
        let vertical = app.viewport.vertical_offset(snapshot.depth, now);
        let origin = (x, vertical);
        render_column(app, frame, column, origin, &snapshot, snapshot.depth == top);
    }
}

fn render_column(
    app: &App,
    frame: &mut Frame,
    column: Rect,
    (column_x, vertical): (i32, i32),
    snapshot: &LevelSnapshot<'_>,
    is_top: bool,
) {
    let title = if snapshot.items.is_empty() {
        format!(" {} ", t().common.no_data)
    } else {
        format!(" {}/{} ", snapshot.active_index + 1, snapshot.items.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_top {
            Styles::border_focused()
        } else {
            Styles::border()
        });
    let inner = block.inner(column);
    frame.render_widget(block, column);

    let item_height = i32::from(app.viewport.item_height());
    // 文本按完整列宽排版，列被部分裁掉时位置保持不变
    let text_width = app.viewport.column_width().saturating_sub(3);

    for (index, &id) in snapshot.items.iter().enumerate() {
        let index_i32 = i32::try_from(index).unwrap_or(i32::MAX);
        let y = i32::from(inner.y) + vertical + index_i32.saturating_mul(item_height);
        let Some((slot, scroll)) = clip(
            column_x + 2,
            y,
            i32::from(text_width),
            item_height,
            inner,
        ) else {
            continue;
        };

        let materialized = snapshot.materialized.get(index).copied().unwrap_or(false);
        let lines = if materialized {
            item::lines(app.browse.cache.peek(id), text_width, app.viewport.item_height())
        } else {
            item::placeholder(app.viewport.item_height())
        };
        let highlight = match (index == snapshot.active_index, is_top) {
            (true, true) => Highlight::Focused,
            (true, false) => Highlight::Path,
            (false, _) => Highlight::None,
        };
        item::render(frame, slot, lines, highlight, scroll);
    }
}

/// 根层加载中或加载失败
fn render_root_state(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let lines = match &app.browse.root_error {
        Some(info) => vec![
            Line::styled(texts.modal.root_failed, Style::default().fg(colors().error)),
            Line::styled(info.to_string(), Styles::muted()),
            Line::from(""),
            Line::styled(texts.item.retry_hint, Styles::muted()),
        ],
        None => vec![Line::styled(texts.status_bar.loading_root, Styles::muted())],
    };

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let y = area.y + area.height.saturating_sub(height) / 2;
    let centered = Rect::new(area.x, y, area.width, height.min(area.height));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}

/// 把 `(x, y, w, h)` 裁剪到 `bounds` 内
///
/// 返回裁剪后的区域与被裁掉的（行数, 列数），完全不相交时返回 `None`。
fn clip(x: i32, y: i32, width: i32, height: i32, bounds: Rect) -> Option<(Rect, (u16, u16))> {
    let left = x.max(i32::from(bounds.x));
    let top = y.max(i32::from(bounds.y));
    let right = x.saturating_add(width).min(i32::from(bounds.right()));
    let bottom = y.saturating_add(height).min(i32::from(bounds.bottom()));
    if left >= right || top >= bottom {
        return None;
    }

    let rect = Rect::new(
        u16::try_from(left).ok()?,
        u16::try_from(top).ok()?,
        u16::try_from(right - left).ok()?,
        u16::try_from(bottom - top).ok()?,
    );
    let skipped = (u16::try_from(top - y).ok()?, u16::try_from(left - x).ok()?);
    Some((rect, skipped))
}
