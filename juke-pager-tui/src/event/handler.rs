//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, PagerMessage};
use crate::model::{App, PagerItem};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop,                                     // 窗口大小改变等，自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_MARKUP.matches(&key) {
        return AppMessage::ToggleMarkup;
    }
    if DefaultKeymap::CLEAR_LOG.matches(&key) {
        return AppMessage::ClearLog;
    }
    if DefaultKeymap::CLEAR_STATUS.matches(&key) {
        return AppMessage::ClearStatus;
    }

    handle_pager_keys(key, app).map_or(AppMessage::Noop, AppMessage::Pager)
}

/// 处理分页条的按键
fn handle_pager_keys(key: KeyEvent, app: &App) -> Option<PagerMessage> {
    if DefaultKeymap::FOCUS_LEFT.matches(&key) {
        return Some(PagerMessage::FocusPrevious);
    }
    if DefaultKeymap::FOCUS_RIGHT.matches(&key) {
        return Some(PagerMessage::FocusNext);
    }
    if DefaultKeymap::FOCUS_FIRST.matches(&key) {
        return Some(PagerMessage::FocusFirst);
    }
    if DefaultKeymap::FOCUS_LAST.matches(&key) {
        return Some(PagerMessage::FocusLast);
    }
    if DefaultKeymap::PAGE_SIZE_UP.matches(&key)
        || DefaultKeymap::PAGE_SIZE_UP_SHIFTED.matches(&key)
    {
        return Some(PagerMessage::NextPageSize);
    }
    if DefaultKeymap::PAGE_SIZE_DOWN.matches(&key) {
        return Some(PagerMessage::PreviousPageSize);
    }
    if DefaultKeymap::BACKSPACE.matches(&key) {
        return Some(PagerMessage::Backspace);
    }

    if DefaultKeymap::ACTIVATE.matches(&key) {
        // 分页器隐藏（只有一页）时没有可点击的元素
        return app.focused_item().map(|_| PagerMessage::Activate);
    }

    match key.code {
        KeyCode::Char(c)
            if c.is_ascii_digit() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(PagerMessage::Input(c))
        }
        _ => None,
    }
}

/// 焦点所在元素的按键提示
pub fn hint_for(item: Option<PagerItem>) -> &'static str {
    match item {
        Some(PagerItem::PageSize) => "Enter/+/- change page size",
        Some(PagerItem::JumpInput | PagerItem::Confirm) => "type digits, Enter to jump",
        Some(_) => "Enter to click",
        None => "pager hidden (single page)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juke_pager_core::PagerOptions;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn demo() -> App {
        App::new(PagerOptions {
            el: ".page".to_string(),
            ..PagerOptions::new(5, 20)
        })
        .unwrap()
    }

    #[test]
    fn keys_map_to_messages() {
        let app = demo();
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit);
        assert_eq!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Pager(PagerMessage::FocusNext)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('7')), &app),
            AppMessage::Pager(PagerMessage::Input('7'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Pager(PagerMessage::Activate)
        );
        assert_eq!(handle_event(press(KeyCode::Char('z')), &app), AppMessage::Noop);
    }

    #[test]
    fn ctrl_c_quits() {
        let app = demo();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(event, &app), AppMessage::Quit);
    }

    #[test]
    fn plus_changes_page_size_with_or_without_shift() {
        let app = demo();
        let next = AppMessage::Pager(PagerMessage::NextPageSize);
        assert_eq!(handle_event(press(KeyCode::Char('+')), &app), next);

        let shifted = Event::Key(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT));
        assert_eq!(handle_event(shifted, &app), next);

        let ctrl = Event::Key(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(ctrl, &app), AppMessage::Noop);
    }

    #[test]
    fn enter_does_nothing_when_pager_is_hidden() {
        let app = App::new(PagerOptions {
            el: ".page".to_string(),
            ..PagerOptions::new(1, 1)
        })
        .unwrap();
        assert_eq!(handle_event(press(KeyCode::Enter), &app), AppMessage::Noop);
    }

    #[test]
    fn release_events_are_ignored() {
        let app = demo();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }
}
