//! 事件日志
//!
//! 通过分页器的 `on` 注册处理器，把收到的每个事件连同时间记录下来。

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Local};
use juke_pager_core::PagerEvent;

/// 一条事件记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub event: PagerEvent,
}

impl LogEntry {
    pub fn now(event: PagerEvent) -> Self {
        Self {
            at: Local::now(),
            event,
        }
    }

    /// 形如 `12:00:01  changePage(7)`
    pub fn line(&self) -> String {
        format!(
            "{}  {}({})",
            self.at.format("%H:%M:%S"),
            self.event.event_type(),
            self.event.value()
        )
    }
}

/// 共享的事件日志，处理器闭包持有一份克隆
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: PagerEvent) {
        self.entries.borrow_mut().push(LogEntry::now(event));
    }

    /// 最近的 `n` 条记录，新的在前
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        self.entries.borrow().iter().rev().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
