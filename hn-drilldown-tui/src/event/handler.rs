//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use super::keymap::DefaultKeymap;
use super::listeners::{KeyListener, ListenerRegistry};
use crate::message::{AppMessage, ModalMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App, listeners: &ListenerRegistry) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(&key_event, app, listeners),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: &KeyEvent, app: &App, listeners: &ListenerRegistry) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    listeners.dispatch(key, app).unwrap_or(AppMessage::Noop)
}

/// 应用级按键（排在导航路由之后）
pub struct AppKeys;

impl KeyListener for AppKeys {
    fn on_key(&self, key: &KeyEvent, app: &App) -> Option<AppMessage> {
        if DefaultKeymap::FORCE_QUIT.matches(key) {
            return Some(AppMessage::Quit);
        }

        // 弹窗打开时吞掉其余按键
        if app.modal.is_open() {
            let closes = DefaultKeymap::CLOSE.matches(key)
                || DefaultKeymap::NAV_ACTIVATE.matches(key)
                || DefaultKeymap::QUIT.matches(key);
            return Some(if closes {
                AppMessage::Modal(ModalMessage::Close)
            } else {
                AppMessage::Noop
            });
        }

        if DefaultKeymap::QUIT.matches(key) {
            Some(AppMessage::Quit)
        } else if DefaultKeymap::HELP.matches(key) || DefaultKeymap::HELP_ALT.matches(key) {
            Some(AppMessage::ShowHelp)
        } else if DefaultKeymap::RETRY.matches(key) {
            Some(AppMessage::Retry)
        } else if DefaultKeymap::CLOSE.matches(key) {
            Some(AppMessage::ClearStatus)
        } else {
            None
        }
    }
}
