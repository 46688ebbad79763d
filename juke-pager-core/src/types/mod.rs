//! 类型定义模块

mod event;
mod options;
mod window;

pub use event::{PagerEvent, PagerEventType};
pub use options::{PagerOptions, PagerOptionsPatch};
pub use window::{PageWindow, PAGER_COUNT};
