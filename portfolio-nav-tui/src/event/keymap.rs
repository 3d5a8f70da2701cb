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
    pub const ESCAPE: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 菜单
    pub const MENU_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const MENU_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 详情页
    pub const ARROW_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const ARROW_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const BUTTON_PREV: KeyBinding = KeyBinding::key(KeyCode::Char('p'));
    pub const BUTTON_NEXT: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const BUTTON_BACK: KeyBinding = KeyBinding::key(KeyCode::Char('b'));
}
