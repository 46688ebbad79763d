//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

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

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const TOGGLE_MARKUP: KeyBinding = KeyBinding::key(KeyCode::Char('m'));
    pub const CLEAR_LOG: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
    pub const CLEAR_STATUS: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 焦点移动
    pub const FOCUS_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const FOCUS_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const FOCUS_FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const FOCUS_LAST: KeyBinding = KeyBinding::key(KeyCode::End);

    // 操作
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
    pub const PAGE_SIZE_UP: KeyBinding = KeyBinding::key(KeyCode::Char('+'));
    /// 部分终端输入 `+` 时带 SHIFT
    pub const PAGE_SIZE_UP_SHIFTED: KeyBinding =
        KeyBinding::new(KeyModifiers::SHIFT, KeyCode::Char('+'));
    pub const PAGE_SIZE_DOWN: KeyBinding = KeyBinding::key(KeyCode::Char('-'));
}
