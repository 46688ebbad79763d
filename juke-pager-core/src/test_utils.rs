//! 测试辅助模块
//!
//! 提供事件记录器和便捷的测试工厂方法。

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::PagerOptions;

// ===== Recorder =====

/// 记录事件处理器的调用，格式为 `tag:value`
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成一个把调用写入记录器的处理器
    pub fn tagged(&self, tag: &'static str) -> impl FnMut(u32) + 'static {
        let calls = Rc::clone(&self.calls);
        move |value| calls.borrow_mut().push(format!("{tag}:{value}"))
    }

    /// 取出并清空已记录的调用
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}

// ===== 工厂方法 =====

/// 演示页使用的配置：第 5 页，共 20 页，挂载到 `.page`
pub fn demo_options() -> PagerOptions {
    PagerOptions {
        el: ".page".to_string(),
        ..PagerOptions::new(5, 20)
    }
}
