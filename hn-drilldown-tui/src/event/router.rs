//! 导航输入路由
//!
//! 把方向键与 Enter 映射到导航操作：
//!
//! | 按键  | 操作                 |
//! |-------|----------------------|
//! | ↑     | 焦点上移             |
//! | ↓     | 焦点下移             |
//! | ←     | 回到根层             |
//! | →     | 展开回复             |
//! | Enter | 打开链接             |
//!
//! 映射到的按键一律被消费，不再传给其他监听器。

use std::rc::Rc;

use crossterm::event::KeyEvent;

use super::keymap::DefaultKeymap;
use super::listeners::{KeyListener, ListenerRegistry, Registration};
use crate::message::{AppMessage, NavigationMessage};
use crate::model::App;

/// 按键到导航操作的映射
pub fn route(key: &KeyEvent) -> Option<NavigationMessage> {
    if DefaultKeymap::NAV_UP.matches(key) {
        Some(NavigationMessage::MoveUp)
    } else if DefaultKeymap::NAV_DOWN.matches(key) {
        Some(NavigationMessage::MoveDown)
    } else if DefaultKeymap::NAV_ASCEND.matches(key) {
        Some(NavigationMessage::Ascend)
    } else if DefaultKeymap::NAV_DESCEND.matches(key) {
        Some(NavigationMessage::Descend)
    } else if DefaultKeymap::NAV_ACTIVATE.matches(key) {
        Some(NavigationMessage::Activate)
    } else {
        None
    }
}

struct NavigationKeys;

impl KeyListener for NavigationKeys {
    fn on_key(&self, key: &KeyEvent, app: &App) -> Option<AppMessage> {
        // 弹窗打开时交给后面的监听器
        if app.modal.is_open() {
            return None;
        }
        route(key).map(AppMessage::Navigation)
    }
}

/// 导航输入路由
///
/// 激活时 `install`，停用时 `uninstall`。重复安装不会产生第二个监听器。
#[derive(Default)]
pub struct InputRouter {
    registration: Option<Registration>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 安装到注册表（幂等）
    pub fn install(&mut self, registry: &ListenerRegistry) {
        if self.is_installed() {
            return;
        }
        self.registration = Some(registry.register(Rc::new(NavigationKeys)));
        log::debug!("导航输入路由已安装");
    }

    /// 从注册表移除
    pub fn uninstall(&mut self) {
        if self.registration.take().is_some() {
            log::debug!("导航输入路由已移除");
        }
    }

    pub fn is_installed(&self) -> bool {
        self.registration
            .as_ref()
            .is_some_and(Registration::is_active)
    }
}
