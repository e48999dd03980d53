//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理（↑ ↓ ← → Enter）
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!         有：
//!             pub fn update(app: &mut App, msg: AppMessage) {
//!                 update_at(app, msg, Instant::now());
//!             }
//!
//!         —— 的主更新函数。
//!             过渡动画以时刻为参数，测试时通过 update_at 传入固定时刻。
//!             复杂的子消息委托给子模块处理（navigation、modal）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 后台消息
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     RootLoaded(Ok(ids))
//!         → 建立导航栈，请求根层窗口内的条目，视口直接就位
//!     RootLoaded(Err(info))
//!         → 记录错误并弹出错误弹窗，按 r 重新加载
//!     NodesResolved(ids)
//!         → 检查推迟的下钻：焦点未动且节点已就绪则再次 descend()
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod modal;
mod navigation;

use std::time::Instant;

use hn_drilldown_core::{ItemId, NavigationStack};

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    update_at(app, msg, Instant::now());
}

/// 以给定时刻处理应用消息
pub fn update_at(app: &mut App, msg: AppMessage, now: Instant) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg, now);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Retry => retry(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Resize(width, height) => {
            app.viewport.resize_terminal(width, height);
            if let Some(stack) = &app.browse.stack {
                app.viewport.relayout(stack, now);
            }
        }

        AppMessage::RootLoaded(Ok(ids)) => {
            log::info!("根层已加载: {} 个条目", ids.len());
            app.browse.root_error = None;
            let stack = NavigationStack::new(ids);
            app.viewport.relayout(&stack, now);
            app.browse.stack = Some(stack);
            app.browse.request_window(0);
            app.clear_status();
        }

        AppMessage::RootLoaded(Err(info)) => {
            log::warn!("根层加载失败: {info}");
            let message = format!("{}\n{info}", t().modal.root_failed);
            app.modal.show_error(t().modal.error_title, &message);
            app.browse.root_error = Some(info);
            app.clear_status();
        }

        AppMessage::NodesResolved(ids) => nodes_resolved(app, &ids, now),

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 重新请求：根层失败时重新加载根层，否则重新请求焦点处的失败条目
fn retry(app: &mut App) {
    if app.browse.root_error.take().is_some() {
        app.browse.reload_root = true;
        app.set_status(t().status_bar.loading_root);
        return;
    }

    let focused = app.browse.stack.as_ref().and_then(NavigationStack::focused_id);
    match focused {
        Some(id) if app.browse.cache.retry(id) => {
            app.set_status(format!("{} #{id}", t().status_bar.retrying));
        }
        _ => app.set_status(t().status_bar.nothing_to_retry),
    }
}

/// 缓存条目完成后重新评估推迟的下钻
fn nodes_resolved(app: &mut App, ids: &[ItemId], now: Instant) {
    let Some(deferred) = app.browse.deferred else {
        return;
    };
    if !ids.contains(&deferred.id) {
        return;
    }
    app.browse.deferred = None;

    let still_focused = app.browse.stack.as_ref().is_some_and(|stack| {
        stack.depth() == deferred.depth + 1 && stack.focused_id() == Some(deferred.id)
    });
    if still_focused {
        log::debug!("条目 {} 已就绪，执行推迟的下钻", deferred.id);
        navigation::descend(app, now);
    }
}
