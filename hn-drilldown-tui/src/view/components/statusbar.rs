//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前状态生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 缓存统计
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(cache_stats(app), Styles::hint_desc()));

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 缓存条目数、进行中的获取数与当前深度
fn cache_stats(app: &App) -> String {
    let texts = &t().status_bar;
    let cache = &app.browse.cache;
    let depth = app.browse.stack.as_ref().map_or(0, |s| s.depth());
    format!(
        "{} {} · {} {} · {} {depth}",
        cache.len(),
        texts.cached,
        cache.in_flight(),
        texts.pending,
        texts.depth,
    )
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    if app.modal.is_open() {
        return vec![(keys.esc, actions.close), (keys.quit, texts.common.quit)];
    }

    let mut hints = Vec::new();
    if app.browse.stack.is_some() {
        hints.push((keys.up_down, actions.move_focus));
        hints.push((keys.right, actions.open_replies));
        hints.push((keys.left, actions.back_to_root));
        hints.push((keys.enter, actions.open_link));
    }
    hints.push((keys.retry, actions.retry));
    hints.push((keys.help, actions.help));
    hints.push((keys.quit, texts.common.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_app;

    #[test]
    fn hints_follow_the_state() {
        let mut app = test_app();
        assert_eq!(get_hints(&app).len(), 3);

        app.browse.stack = Some(hn_drilldown_core::NavigationStack::new(vec![1]));
        assert_eq!(get_hints(&app).len(), 7);

        app.modal.show_help();
        assert_eq!(get_hints(&app)[0].0, t().hints.keys.esc);
    }

    #[test]
    fn stats_report_cache_and_depth() {
        let app = test_app();
        let stats = cache_stats(&app);
        assert!(stats.starts_with("0 "));
        assert!(stats.ends_with(" 0"));
    }
}
