//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift（部分终端输入 `?` 时会带上 Shift）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const RETRY: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const CLOSE: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 导航
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_ASCEND: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const NAV_DESCEND: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const NAV_ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Enter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_is_ignored_for_characters_only() {
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert!(DefaultKeymap::HELP_ALT.matches(&question));

        let shift_up = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
        assert!(!DefaultKeymap::NAV_UP.matches(&shift_up));

        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(!DefaultKeymap::RETRY.matches(&ctrl_r));
    }
}
