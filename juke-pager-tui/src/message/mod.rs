//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod pager;          // 分页条子消息
//!
//!         pub use app::AppMessage;
//!         pub use pager::PagerMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                       // 退出应用
//!             Pager(PagerMessage),        // 分页条子消息，与主消息分离
//!             ToggleMarkup,               // 显示/隐藏渲染出的标记
//!             ClearLog,                   // 清空事件日志
//!             ClearStatus,                // 清除状态栏消息
//!             Noop,                       // 无操作，用于代替 Option::None
//!         }
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     → 去往 src/update/mod.rs 吧
//!

mod app;
mod pager;

pub use app::AppMessage;
pub use pager::PagerMessage;
