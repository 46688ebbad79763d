//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod pager;              // 分页条子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!     分页器是受控组件：click 只会触发事件，不会改变当前页。
//!     在 pager.rs 中，Update 层扮演宿主的角色：
//!
//!         changePage(n)       → refresh({ currentPage: n })
//!         changePageSize(n)   → refresh({ pageSize: n, currentPage: 1 })
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod pager;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Pager(pager_msg) => {
            pager::update(app, pager_msg);
        }

        AppMessage::ToggleMarkup => {
            app.show_markup = !app.show_markup;
        }

        AppMessage::ClearLog => {
            app.event_log.clear();
            app.set_status("Event log cleared");
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
