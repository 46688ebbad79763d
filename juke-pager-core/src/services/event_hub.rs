//! 事件总线
//!
//! 最小的发布/订阅实现：`on` / `once` / `off` / `trigger`。
//!
//! - 同一事件类型允许注册多个处理器，按注册顺序同步调用
//! - `off` 移除该类型的全部处理器
//! - `once` 注册的处理器在第一次调用后只移除自身
//!
//! 总线放在 `RefCell` 里与处理器共享时，用 [`EventHub::dispatch`] 触发：
//! 先取出本次要调用的处理器并释放借用，处理器内部因此可以再调用
//! `on` / `once` / `off`，改动从下一次触发开始生效。

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::types::{PagerEvent, PagerEventType};

/// 可在总线之外调用的处理器
pub type SharedHandler = Rc<RefCell<dyn FnMut(u32)>>;

struct Listener {
    event_type: PagerEventType,
    once: bool,
    handler: SharedHandler,
}

/// 事件总线
#[derive(Default)]
pub struct EventHub {
    listeners: Vec<Listener>,
}

impl EventHub {
    /// 创建空的事件总线
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, event_type: PagerEventType, once: bool, handler: SharedHandler) {
        self.listeners.push(Listener {
            event_type,
            once,
            handler,
        });
    }

    /// 注册处理器
    pub fn on(&mut self, event_type: PagerEventType, handler: impl FnMut(u32) + 'static) {
        self.register(event_type, false, Rc::new(RefCell::new(handler)));
    }

    /// 注册只触发一次的处理器
    pub fn once(&mut self, event_type: PagerEventType, handler: impl FnMut(u32) + 'static) {
        self.register(event_type, true, Rc::new(RefCell::new(handler)));
    }

    /// 移除某类型的全部处理器，返回移除数量
    pub fn off(&mut self, event_type: PagerEventType) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.event_type != event_type);
        before - self.listeners.len()
    }

    /// 取出一次触发要调用的处理器（按注册顺序），同时移除其中的 `once` 处理器
    pub fn handlers_for(&mut self, event_type: PagerEventType) -> Vec<SharedHandler> {
        let handlers = self
            .listeners
            .iter()
            .filter(|l| l.event_type == event_type)
            .map(|l| Rc::clone(&l.handler))
            .collect();
        self.listeners.retain(|l| !(l.once && l.event_type == event_type));
        handlers
    }

    /// 触发事件，返回被调用的处理器数量
    pub fn trigger(&mut self, event: PagerEvent) -> usize {
        let handlers = self.handlers_for(event.event_type());
        call_all(event, &handlers)
    }

    /// 触发事件，调用处理器期间不持有总线的借用
    ///
    /// 总线正被借用时（例如在 `on` 的过程中）事件被丢弃，返回 0。
    pub fn dispatch(hub: &RefCell<Self>, event: PagerEvent) -> usize {
        let handlers = match hub.try_borrow_mut() {
            Ok(mut hub) => hub.handlers_for(event.event_type()),
            Err(_) => {
                log::warn!("Dropped {} event: event hub is busy", event.event_type());
                return 0;
            }
        };
        call_all(event, &handlers)
    }

    /// 某类型当前注册的处理器数量
    #[must_use]
    pub fn listener_count(&self, event_type: PagerEventType) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.event_type == event_type)
            .count()
    }
}

fn call_all(event: PagerEvent, handlers: &[SharedHandler]) -> usize {
    let event_type = event.event_type();
    let value = event.value();
    let mut called = 0;

    for handler in handlers {
        // 处理器在自身内部再次触发同一事件时跳过自身
        let Ok(mut handler) = handler.try_borrow_mut() else {
            log::warn!("Skipped re-entrant {event_type} handler");
            continue;
        };
        (&mut *handler)(value);
        called += 1;
    }

    log::debug!("Triggered {event_type}({value}) on {called} handler(s)");
    called
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("change_page", &self.listener_count(PagerEventType::ChangePage))
            .field(
                "change_page_size",
                &self.listener_count(PagerEventType::ChangePageSize),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Recorder;

    #[test]
    fn trigger_calls_matching_handlers_in_order() {
        let rec = Recorder::new();
        let mut hub = EventHub::new();
        hub.on(PagerEventType::ChangePage, rec.tagged("a"));
        hub.on(PagerEventType::ChangePageSize, rec.tagged("size"));
        hub.on(PagerEventType::ChangePage, rec.tagged("b"));

        assert_eq!(hub.trigger(PagerEvent::ChangePage(3)), 2);
        assert_eq!(rec.take(), vec!["a:3", "b:3"]);
    }

    #[test]
    fn duplicate_registrations_are_kept() {
        let rec = Recorder::new();
        let mut hub = EventHub::new();
        hub.on(PagerEventType::ChangePage, rec.tagged("x"));
        hub.on(PagerEventType::ChangePage, rec.tagged("x"));
        assert_eq!(hub.listener_count(PagerEventType::ChangePage), 2);

        hub.trigger(PagerEvent::ChangePage(1));
        assert_eq!(rec.take(), vec!["x:1", "x:1"]);
    }

    #[test]
    fn off_removes_every_handler_of_type() {
        let rec = Recorder::new();
        let mut hub = EventHub::new();
        hub.on(PagerEventType::ChangePage, rec.tagged("a"));
        hub.on(PagerEventType::ChangePage, rec.tagged("b"));
        hub.on(PagerEventType::ChangePageSize, rec.tagged("size"));

        assert_eq!(hub.off(PagerEventType::ChangePage), 2);
        assert_eq!(hub.trigger(PagerEvent::ChangePage(2)), 0);
        hub.trigger(PagerEvent::ChangePageSize(10));
        assert_eq!(rec.take(), vec!["size:10"]);
    }

    #[test]
    fn once_runs_a_single_time_and_leaves_others() {
        let rec = Recorder::new();
        let mut hub = EventHub::new();
        hub.once(PagerEventType::ChangePage, rec.tagged("once"));
        hub.on(PagerEventType::ChangePage, rec.tagged("always"));

        hub.trigger(PagerEvent::ChangePage(1));
        hub.trigger(PagerEvent::ChangePage(2));

        assert_eq!(rec.take(), vec!["once:1", "always:1", "always:2"]);
        assert_eq!(hub.listener_count(PagerEventType::ChangePage), 1);
    }

    #[test]
    fn once_survives_other_event_types() {
        let rec = Recorder::new();
        let mut hub = EventHub::new();
        hub.once(PagerEventType::ChangePage, rec.tagged("once"));

        hub.trigger(PagerEvent::ChangePageSize(20));
        assert_eq!(hub.listener_count(PagerEventType::ChangePage), 1);

        hub.trigger(PagerEvent::ChangePage(4));
        assert_eq!(rec.take(), vec!["once:4"]);
    }

    #[test]
    fn handler_can_unsubscribe_during_dispatch() {
        let rec = Recorder::new();
        let hub = Rc::new(RefCell::new(EventHub::new()));

        let weak = Rc::downgrade(&hub);
        let mut record = rec.tagged("first");
        hub.borrow_mut().on(PagerEventType::ChangePage, move |value| {
            record(value);
            if let Some(hub) = weak.upgrade() {
                hub.borrow_mut().off(PagerEventType::ChangePage);
            }
        });
        hub.borrow_mut().on(PagerEventType::ChangePage, rec.tagged("second"));

        // 本次触发已取出的处理器照常执行，`off` 从下一次开始生效
        assert_eq!(EventHub::dispatch(&hub, PagerEvent::ChangePage(2)), 2);
        assert_eq!(EventHub::dispatch(&hub, PagerEvent::ChangePage(3)), 0);
        assert_eq!(rec.take(), vec!["first:2", "second:2"]);
        assert_eq!(hub.borrow().listener_count(PagerEventType::ChangePage), 0);
    }

    #[test]
    fn handler_can_register_during_dispatch() {
        let rec = Recorder::new();
        let hub = Rc::new(RefCell::new(EventHub::new()));

        let weak = Rc::downgrade(&hub);
        let later = rec.clone();
        hub.borrow_mut().once(PagerEventType::ChangePage, move |_| {
            if let Some(hub) = weak.upgrade() {
                hub.borrow_mut().once(PagerEventType::ChangePage, later.tagged("added"));
            }
        });

        EventHub::dispatch(&hub, PagerEvent::ChangePage(1));
        assert!(rec.take().is_empty());

        EventHub::dispatch(&hub, PagerEvent::ChangePage(4));
        assert_eq!(rec.take(), vec!["added:4"]);
        assert_eq!(hub.borrow().listener_count(PagerEventType::ChangePage), 0);
    }

    #[test]
    fn nested_dispatch_skips_the_running_handler() {
        let rec = Recorder::new();
        let hub = Rc::new(RefCell::new(EventHub::new()));

        let weak = Rc::downgrade(&hub);
        let mut record = rec.tagged("outer");
        hub.borrow_mut().on(PagerEventType::ChangePage, move |value| {
            record(value);
            if let Some(hub) = weak.upgrade() {
                EventHub::dispatch(&hub, PagerEvent::ChangePageSize(value));
            }
        });
        hub.borrow_mut().on(PagerEventType::ChangePageSize, rec.tagged("size"));

        EventHub::dispatch(&hub, PagerEvent::ChangePage(6));
        assert_eq!(rec.take(), vec!["outer:6", "size:6"]);
    }

    #[test]
    fn dispatch_on_a_busy_hub_is_dropped() {
        let hub = RefCell::new(EventHub::new());
        hub.borrow_mut().on(PagerEventType::ChangePage, |_| {});
        let _guard = hub.borrow();
        assert_eq!(EventHub::dispatch(&hub, PagerEvent::ChangePage(1)), 0);
    }
}
