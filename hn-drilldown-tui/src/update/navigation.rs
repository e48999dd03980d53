//! 导航更新逻辑

use std::time::Instant;

use hn_drilldown_core::{CacheEntry, DescendOutcome};

use crate::i18n::t;
use crate::message::NavigationMessage;
use crate::model::{App, DeferredDescend};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage, now: Instant) {
    match msg {
        NavigationMessage::MoveUp => move_focus(app, -1, now),
        NavigationMessage::MoveDown => move_focus(app, 1, now),
        NavigationMessage::Ascend => ascend(app, now),
        NavigationMessage::Descend => descend(app, now),
        NavigationMessage::Activate => activate(app),
    }
}

fn move_focus(app: &mut App, delta: isize, now: Instant) {
    let Some(stack) = app.browse.stack.as_mut() else {
        return;
    };
    let old_active = stack.top().active_index();
    if !stack.move_active(delta) {
        return;
    }

    // 焦点移动后推迟的下钻作废
    app.browse.deferred = None;
    app.browse.request_entering(old_active);
    if let Some(stack) = &app.browse.stack {
        app.viewport.sync(stack, now);
    }
    app.clear_status();
}

fn ascend(app: &mut App, now: Instant) {
    let Some(stack) = app.browse.stack.as_mut() else {
        return;
    };
    if !stack.ascend() {
        return;
    }

    app.browse.deferred = None;
    app.viewport.sync(stack, now);
    app.clear_status();
}

/// 下钻到焦点节点的回复
///
/// 焦点节点仍在加载时记录推迟的下钻，就绪后由 `NodesResolved` 再次触发。
pub(super) fn descend(app: &mut App, now: Instant) {
    let browse = &mut app.browse;
    let Some(stack) = browse.stack.as_mut() else {
        return;
    };
    let outcome = stack.descend(&browse.cache);
    let top = stack.depth() - 1;

    match outcome {
        DescendOutcome::Pushed => {
            browse.deferred = None;
            browse.request_window(top);
            if let Some(stack) = &browse.stack {
                app.viewport.sync(stack, now);
            }
            app.clear_status();
        }

        DescendOutcome::NotReady(id) => {
            let entry = browse.cache.request(id);
            if entry.is_failed() {
                browse.deferred = None;
                app.set_status(t().status_bar.still_failed);
            } else {
                browse.deferred = Some(DeferredDescend { depth: top, id });
                app.set_status(t().status_bar.waiting);
            }
        }

        DescendOutcome::NoChildren => {
            app.set_status(t().status_bar.no_children);
        }

        DescendOutcome::EmptyLevel => {}
    }
}

fn activate(app: &mut App) {
    let Some(stack) = &app.browse.stack else {
        return;
    };
    let opened = stack
        .activate(&app.browse.cache, app.opener.as_ref())
        .map(str::to_string);

    match opened {
        Some(url) => app.set_status(format!("{}: {url}", t().status_bar.opened)),
        None => {
            let pending = app
                .browse
                .focused_entry()
                .is_some_and(CacheEntry::is_pending);
            if !pending {
                app.set_status(t().status_bar.no_link);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hn_drilldown_core::NavigationStack;

    use super::*;
    use crate::message::AppMessage;
    use crate::test_utils::{app_with, comment, settle, story, wait_for, StubFetcher};
    use crate::update::update_at;

    fn nav(app: &mut App, msg: NavigationMessage) {
        update_at(app, AppMessage::Navigation(msg), Instant::now());
    }

    fn top_items(app: &App) -> Vec<u64> {
        app.browse
            .stack
            .as_ref()
            .map(|s| s.top().items().to_vec())
            .unwrap_or_default()
    }

    fn loaded(fetcher: StubFetcher, root: Vec<u64>) -> (App, crate::test_utils::RecordingOpener) {
        let (mut app, opener) = app_with(fetcher);
        update_at(&mut app, AppMessage::RootLoaded(Ok(root)), Instant::now());
        (app, opener)
    }

    #[test]
    fn descend_then_ascend_collapses_to_root() {
        let fetcher = StubFetcher::with_nodes([
            story(1, None, &[]),
            story(2, None, &[10, 11]),
            story(3, None, &[]),
            comment(10, 2, &[20]),
            comment(11, 2, &[]),
            comment(20, 10, &[]),
        ]);
        let (mut app, _) = loaded(fetcher, vec![1, 2, 3]);
        settle(&mut app);

        nav(&mut app, NavigationMessage::MoveDown);
        nav(&mut app, NavigationMessage::Descend);
        settle(&mut app);
        assert_eq!(top_items(&app), vec![10, 11]);

        nav(&mut app, NavigationMessage::Descend);
        assert_eq!(top_items(&app), vec![20]);
        assert_eq!(app.browse.stack.as_ref().map(NavigationStack::depth), Some(3));

        nav(&mut app, NavigationMessage::Ascend);
        assert_eq!(top_items(&app), vec![1, 2, 3]);
        assert_eq!(
            app.browse.stack.as_ref().map(|s| s.top().active_index()),
            Some(1)
        );
    }

    #[test]
    fn descend_on_leaf_reports_no_children() {
        let (mut app, _) = loaded(StubFetcher::with_nodes([story(1, None, &[])]), vec![1]);
        settle(&mut app);

        nav(&mut app, NavigationMessage::Descend);
        assert_eq!(top_items(&app), vec![1]);
        assert_eq!(app.status_message.as_deref(), Some(t().status_bar.no_children));
    }

    #[test]
    fn descend_on_failed_node_leaves_stack_untouched() {
        let (mut app, _) = loaded(StubFetcher::default(), vec![99]);
        settle(&mut app);

        nav(&mut app, NavigationMessage::Descend);
        nav(&mut app, NavigationMessage::MoveDown);
        assert_eq!(top_items(&app), vec![99]);
        assert!(app.browse.deferred.is_none());
        assert_eq!(app.status_message.as_deref(), Some(t().status_bar.still_failed));
    }

    #[test]
    fn deferred_descend_runs_when_node_resolves() {
        let fetcher = StubFetcher::with_nodes([story(1, None, &[10]), comment(10, 1, &[])]);
        let (mut app, _) = loaded(fetcher, vec![1]);

        // 1 仍在加载
        nav(&mut app, NavigationMessage::Descend);
        assert_eq!(app.browse.deferred, Some(DeferredDescend { depth: 0, id: 1 }));

        let resolved = wait_for(&mut app, 1);
        update_at(&mut app, AppMessage::NodesResolved(resolved), Instant::now());
        assert_eq!(top_items(&app), vec![10]);
        assert!(app.browse.deferred.is_none());
    }

    #[test]
    fn moving_focus_cancels_deferred_descend() {
        let fetcher = StubFetcher::with_nodes([story(1, None, &[10]), story(2, None, &[])])
            .with_hung(1);
        let (mut app, _) = loaded(fetcher, vec![1, 2]);

        nav(&mut app, NavigationMessage::Descend);
        assert!(app.browse.deferred.is_some());
        nav(&mut app, NavigationMessage::MoveDown);
        assert!(app.browse.deferred.is_none());
    }

    #[test]
    fn moving_requests_entering_items() {
        let ids: Vec<u64> = (1..=30).collect();
        let fetcher = StubFetcher::with_nodes(ids.iter().map(|&id| story(id, None, &[])));
        let (mut app, _) = loaded(fetcher, ids);
        assert_eq!(app.browse.cache.fetches_started(), 8);

        nav(&mut app, NavigationMessage::MoveDown);
        assert_eq!(app.browse.cache.fetches_started(), 9);
        assert!(app.browse.cache.peek(9).is_some());

        nav(&mut app, NavigationMessage::MoveUp);
        assert_eq!(app.browse.cache.fetches_started(), 9);
    }

    #[test]
    fn activate_opens_story_link() {
        let fetcher = StubFetcher::with_nodes([
            story(1, Some("https://example.com/a"), &[]),
            story(2, None, &[]),
        ]);
        let (mut app, opener) = loaded(fetcher, vec![1, 2]);
        settle(&mut app);

        nav(&mut app, NavigationMessage::Activate);
        assert_eq!(opener.opened(), vec!["https://example.com/a".to_string()]);

        nav(&mut app, NavigationMessage::MoveDown);
        nav(&mut app, NavigationMessage::Activate);
        assert_eq!(opener.opened().len(), 1);
        assert_eq!(app.status_message.as_deref(), Some(t().status_bar.no_link));
    }

    #[test]
    fn keys_before_root_loads_are_ignored() {
        let (mut app, opener) = app_with(StubFetcher::default());
        for msg in [
            NavigationMessage::MoveDown,
            NavigationMessage::Descend,
            NavigationMessage::Ascend,
            NavigationMessage::Activate,
        ] {
            nav(&mut app, msg);
        }
        assert!(app.browse.stack.is_none());
        assert!(opener.opened().is_empty());
    }
}
