//! 界面组件

pub mod event_log;
pub mod markup;
pub mod pager_bar;
pub mod statusbar;
