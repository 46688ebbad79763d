//! 页码窗口类型定义

use serde::{Deserialize, Serialize};

/// 页码按钮的最大数量（含首页和末页）
pub const PAGER_COUNT: u32 = 7;

/// 可见页码窗口
///
/// `pages` 不包含首页 1 和末页 `page_count`，两者总是单独渲染。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// 首末页之间显示的页码（严格递增）
    pub pages: Vec<u32>,
    /// 首页之后是否显示「向前更多」
    pub show_prev_more: bool,
    /// 末页之前是否显示「向后更多」
    pub show_next_more: bool,
}

impl PageWindow {
    /// 窗口内是否包含某页
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        self.pages.contains(&page)
    }

    /// 是否没有中间页码
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
