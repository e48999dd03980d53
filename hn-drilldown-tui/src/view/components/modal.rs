//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 去掉边框与左右留白后的区域
fn padded(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(t().modal.error_close, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, padded(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let area = centered_rect(50, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.help_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let heading = |text: &'static str| {
        Line::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        heading(texts.modal.help_navigation),
        row(keys.up_down, actions.move_focus),
        row(keys.right, actions.open_replies),
        row(keys.left, actions.back_to_root),
        row(keys.enter, actions.open_link),
        Line::from(""),
        heading(texts.modal.help_actions),
        row(keys.retry, actions.retry),
        row(keys.help, actions.help),
        row(keys.esc, actions.close),
        row(keys.quit, texts.common.quit),
        Line::from(""),
        Line::styled(texts.modal.help_close, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), padded(area));
}
