//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 应用主状态 App
//!         mod event_log;      // 事件日志
//!         mod pager;          // 分页条元素
//!
//!
//!     App {
//!         should_quit: bool,                          // 决定应用是否应该退出
//!         pager: Pagination<InMemoryContainer>,       // 分页器，渲染到内存容器
//!         focus: usize,                               // 焦点所在的分页条元素
//!         page_input: String,                         // 跳页输入框
//!         size_index: usize,                          // 每页条数下拉框选中项
//!         show_markup: bool,                          // 是否显示标记面板
//!         event_log: EventLog,                        // 收到的事件
//!         status_message: Option<String>,             // 状态栏消息
//!     }
//!
//!
//!     分页条元素（PagerItem）：
//!
//!         [10条/页 ▾] « 1 … 8 9 10 11 12 … 20 » [ 10] 确定
//!          PageSize  Prev   QuickPrev       QuickNext  JumpInput  Confirm
//!
//!         每个元素给出与标记一致的 class 列表，
//!         Enter 时据此构造 ClickTarget，交给核心库的 Pagination::click 解析。
//!
//!
//!     数据流：
//!         用户在页码 7 上按 Enter
//!             ↓
//!         update 层调用 app.pager.click(target)
//!             ↓
//!         核心库触发 changePage(7)，事件日志记下一条
//!             ↓
//!         update 层作为宿主调用 app.pager.refresh({ currentPage: 7 })
//!             ↓
//!         view 层读取新的页码窗口与标记
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod event_log;
mod pager;

pub use app::App;
pub use event_log::{EventLog, LogEntry};
pub use pager::PagerItem;
