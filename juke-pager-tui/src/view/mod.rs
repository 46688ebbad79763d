//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局
//!         pub mod theme;          // 主题与样式
//!         mod components;         // 各个面板
//!
//!
//!     布局：
//!         ┌──────────────────────────── 标题栏 ───────────────────────────┐
//!         │ ┌─ Pager ───────────────────────────────────────────────────┐ │
//!         │ │  [5条/页 ▾] « 1 … 3 4 5 6 7 … 20 » 共有20 页 到 [  5] 确定 │ │
//!         │ └───────────────────────────────────────────────────────────┘ │
//!         │ ┌─ Markup ───────────────────┐ ┌─ Events ──────────────────┐ │
//!         │ │ <ul class="juke-pager ...">│ │ 12:00:01  changePage(7)   │ │
//!         │ └────────────────────────────┘ └───────────────────────────┘ │
//!         └──────────────────────────── 状态栏 ───────────────────────────┘
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
