//! 按键监听器注册表
//!
//! 由组合根（app.rs）持有。每次注册返回一个 [`Registration`]，
//! 丢弃它即注销。分发按注册顺序进行，第一个消费按键的监听器
//! 之后的监听器不再收到该按键。

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crossterm::event::KeyEvent;

use crate::message::AppMessage;
use crate::model::App;

/// 按键监听器
pub trait KeyListener {
    /// 返回 `Some` 表示消费该按键
    fn on_key(&self, key: &KeyEvent, app: &App) -> Option<AppMessage>;
}

#[derive(Default)]
struct Slots {
    next_id: u64,
    entries: Vec<(u64, Rc<dyn KeyListener>)>,
}

/// 监听器注册表
#[derive(Default)]
pub struct ListenerRegistry {
    slots: Rc<RefCell<Slots>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册监听器
    #[must_use = "丢弃 Registration 会立即注销监听器"]
    pub fn register(&self, listener: Rc<dyn KeyListener>) -> Registration {
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        slots.entries.push((id, listener));
        Registration {
            id,
            slots: Rc::downgrade(&self.slots),
        }
    }

    /// 当前注册的监听器数量
    pub fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 分发按键，返回第一个消费者产生的消息
    pub fn dispatch(&self, key: &KeyEvent, app: &App) -> Option<AppMessage> {
        // 先复制一份列表，监听器回调期间注册表可被修改
        let listeners: Vec<Rc<dyn KeyListener>> = self
            .slots
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        listeners
            .iter()
            .find_map(|listener| listener.on_key(key, app))
    }
}

/// 一次注册，丢弃时注销
pub struct Registration {
    id: u64,
    slots: Weak<RefCell<Slots>>,
}

impl Registration {
    /// 对应的监听器是否仍在注册表中
    pub fn is_active(&self) -> bool {
        self.slots.upgrade().is_some_and(|slots| {
            let slots = slots.borrow();
            slots.entries.iter().any(|(id, _)| *id == self.id)
        })
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::test_utils::test_app;

    struct Fixed(Option<AppMessage>);

    impl KeyListener for Fixed {
        fn on_key(&self, _key: &KeyEvent, _app: &App) -> Option<AppMessage> {
            self.0.clone()
        }
    }

    fn key() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)
    }

    #[test]
    fn first_consumer_wins() {
        let app = test_app();
        let registry = ListenerRegistry::new();
        let _pass = registry.register(Rc::new(Fixed(None)));
        let _first = registry.register(Rc::new(Fixed(Some(AppMessage::Quit))));
        let _second = registry.register(Rc::new(Fixed(Some(AppMessage::ShowHelp))));

        assert_eq!(registry.dispatch(&key(), &app), Some(AppMessage::Quit));
    }

    #[test]
    fn dropping_registration_unregisters() {
        let app = test_app();
        let registry = ListenerRegistry::new();
        let first = registry.register(Rc::new(Fixed(Some(AppMessage::Quit))));
        let _second = registry.register(Rc::new(Fixed(Some(AppMessage::ShowHelp))));
        assert_eq!(registry.len(), 2);
        assert!(first.is_active());

        drop(first);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.dispatch(&key(), &app), Some(AppMessage::ShowHelp));
    }

    #[test]
    fn registration_outliving_registry_is_harmless() {
        let registry = ListenerRegistry::new();
        let registration = registry.register(Rc::new(Fixed(None)));
        drop(registry);
        assert!(!registration.is_active());
        drop(registration);
    }

    #[test]
    fn unconsumed_key_yields_none() {
        let app = test_app();
        let registry = ListenerRegistry::new();
        let _pass = registry.register(Rc::new(Fixed(None)));
        assert_eq!(registry.dispatch(&key(), &app), None);
    }
}
