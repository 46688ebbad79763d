//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!         · handle_event    事件分发
//!
//!         按键映射：
//!             q / Ctrl+C      → AppMessage::Quit
//!             m               → AppMessage::ToggleMarkup
//!             c               → AppMessage::ClearLog
//!             Esc             → AppMessage::ClearStatus
//!             ←/→ Home/End    → PagerMessage::Focus*
//!             Enter           → PagerMessage::Activate（点击焦点所在元素）
//!             0-9 Backspace   → 编辑跳页输入框
//!             + / -           → 切换每页条数
//!

mod handler;
mod keymap;

pub use handler::{handle_event, hint_for, poll_event};
