//! 主布局渲染

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::state::{STATUS_HEIGHT, TITLE_HEIGHT};
use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame, now: Instant) {
    let size = frame.area();

    // 三层布局：标题栏 + 层级区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),  // 标题栏
            Constraint::Min(1),                // 层级区
            Constraint::Length(STATUS_HEIGHT), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let levels_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 渲染层级列
    components::levels::render(app, frame, levels_area, now);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = format!(
        " {} v{} · {}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION"),
        app.feed.as_str()
    );
    let paragraph = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::message::{AppMessage, NavigationMessage};
    use crate::test_utils::{app_with, comment, settle, story, StubFetcher};
    use crate::update::update_at;

    fn draw(app: &App, now: Instant) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(120, 42)).expect("test terminal");
        terminal
            .draw(|frame| render(app, frame, now))
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn contains(buffer: &Buffer, needle: &str) -> bool {
        let area = buffer.area;
        (area.top()..area.bottom()).any(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.contains(needle)
        })
    }

    #[test]
    fn loading_screen_before_root_arrives() {
        let (app, _) = app_with(StubFetcher::default());
        let buffer = draw(&app, Instant::now());
        assert!(contains(&buffer, t().status_bar.loading_root));
        assert!(contains(&buffer, t().common.app_name));
    }

    #[test]
    fn levels_render_side_by_side() {
        let fetcher = StubFetcher::with_nodes([
            story(1, None, &[10, 11]),
            comment(10, 1, &[]),
            comment(11, 1, &[]),
        ]);
        let (mut app, _) = app_with(fetcher);
        update_at(&mut app, AppMessage::RootLoaded(Ok(vec![1])), Instant::now());
        settle(&mut app);
        assert!(contains(&draw(&app, Instant::now()), "Story 1"));

        update_at(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Descend),
            Instant::now(),
        );
        settle(&mut app);

        // 两列并排：根层被推向左侧，回复列位于中央
        let buffer = draw(&app, Instant::now() + hn_drilldown_core::TRANSITION_DURATION);
        assert!(contains(&buffer, "reply 10"));
        assert!(contains(&buffer, "reply 11"));
    }

    #[test]
    fn help_modal_is_drawn_on_top() {
        let (mut app, _) = app_with(StubFetcher::default());
        app.modal.show_help();
        let buffer = draw(&app, Instant::now());
        assert!(contains(&buffer, t().modal.help_title));
        assert!(contains(&buffer, t().modal.help_close));
    }
}
