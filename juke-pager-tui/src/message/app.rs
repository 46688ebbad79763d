//! 应用主消息枚举

use super::PagerMessage;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 分页条相关消息
    Pager(PagerMessage),

    /// 显示/隐藏标记面板
    ToggleMarkup,

    /// 清空事件日志
    ClearLog,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
