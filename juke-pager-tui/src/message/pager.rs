//! 分页条消息

/// 分页条上的操作
///
/// 这些消息模拟浏览器中对分页器的点击和输入。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerMessage {
    /// 焦点左移
    FocusPrevious,
    /// 焦点右移
    FocusNext,
    /// 焦点移到第一个元素
    FocusFirst,
    /// 焦点移到最后一个元素
    FocusLast,
    /// 点击焦点所在元素
    Activate,
    /// 在跳页输入框中输入数字
    Input(char),
    /// 删除跳页输入框的最后一个字符
    Backspace,
    /// 跳页输入框提交（相当于点击「确定」）
    SubmitInput,
    /// 在每页条数下拉框中选择上一项
    PreviousPageSize,
    /// 在每页条数下拉框中选择下一项
    NextPageSize,
}
