//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关，负责终端的初始化和恢复。
//!
//!
//!     · init_terminal()
//!         - enable_raw_mode()：关闭行缓冲与回显，按键立即生效
//!         - EnterAlternateScreen：在备用屏幕中运行，退出后恢复原有内容
//!         - 安装 panic hook，panic 时同样恢复终端
//!
//!     · restore_terminal()
//!         无论程序是正常退出还是发生错误，都必须调用此函数！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
