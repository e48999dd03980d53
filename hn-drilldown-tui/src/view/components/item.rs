//! 条目组件
//!
//! 每个条目占用固定高度的槽位，无论已加载、加载中、失败还是
//! 未实体化，行数都不超过槽位高度。

use chrono::Local;
use hn_drilldown_core::{CacheEntry, CacheStatus, Node};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::util::{html_to_text, truncate_to_width, wrap_to_width};
use crate::view::theme::{colors, Styles};

/// 条目的高亮方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    /// 顶层焦点
    Focused,
    /// 上层中通向顶层的条目
    Path,
}

/// 渲染一个槽位
///
/// `scroll` 为槽位被裁掉的（行数, 列数）。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    lines: Vec<Line<'static>>,
    highlight: Highlight,
    scroll: (u16, u16),
) {
    let mut paragraph = Paragraph::new(lines).scroll(scroll);
    match highlight {
        Highlight::Focused => paragraph = paragraph.style(Styles::selected()),
        Highlight::Path => paragraph = paragraph.style(Styles::path()),
        Highlight::None => {}
    }
    frame.render_widget(paragraph, area);
}

/// 未实体化的占位
pub fn placeholder(height: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(t().item.placeholder, Styles::muted())];
    lines.resize(usize::from(height.max(1)), Line::default());
    lines
}

/// 条目内容
pub fn lines(entry: Option<&CacheEntry>, width: u16, height: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let height = usize::from(height.max(1));
    let mut lines = match entry.map(|e| &e.status) {
        None | Some(CacheStatus::Pending) => {
            vec![Line::styled(t().item.loading, Styles::muted())]
        }
        Some(CacheStatus::Failed(info)) => vec![
            Line::styled(
                truncate_to_width(&format!("{}: {}", t().item.failed, info.kind), width),
                Style::default().fg(colors().error),
            ),
            Line::styled(t().item.retry_hint, Styles::muted()),
        ],
        Some(CacheStatus::Ready(node)) => node_lines(node, width, height),
    };
    lines.truncate(height);
    lines
}

fn node_lines(node: &Node, width: usize, height: usize) -> Vec<Line<'static>> {
    let texts = t();
    let with_footer = height >= 3;
    let body_rows = if with_footer { height - 2 } else { height - 1 };

    let author = node.author.as_deref().unwrap_or(texts.item.anonymous);
    let time = node
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");
    let header = format!("{} · {author} · {time}", node.kind.name());
    let mut lines = vec![Line::styled(truncate_to_width(&header, width), Styles::muted())];

    let (body, body_style) = if node.deleted {
        (texts.item.deleted.to_string(), Styles::muted())
    } else if node.dead {
        (texts.item.dead.to_string(), Styles::muted())
    } else if let Some(title) = node.title() {
        (
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    } else {
        let text = node.text.as_deref().map(html_to_text).unwrap_or_default();
        (text, Style::default())
    };
    lines.extend(
        wrap_to_width(&body, width, body_rows)
            .into_iter()
            .map(|row| Line::styled(row, body_style)),
    );

    if with_footer {
        lines.resize(height - 1, Line::default());
        lines.push(footer(node));
    }
    lines
}

fn footer(node: &Node) -> Line<'static> {
    let texts = t();
    let mut spans = Vec::new();
    if let Some(score) = node.score() {
        spans.push(Span::styled(
            format!("{score} {}", texts.item.points),
            Style::default().fg(colors().accent),
        ));
        spans.push(Span::styled(" · ", Styles::muted()));
    }
    let replies = if node.has_children() {
        format!("{} {} →", node.children.len(), texts.item.replies)
    } else {
        texts.item.no_replies.to_string()
    };
    spans.push(Span::styled(replies, Styles::muted()));
    Line::from(spans)
}
