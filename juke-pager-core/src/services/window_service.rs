//! 页码窗口计算
//!
//! 首页 1 与末页 `page_count` 固定显示，中间最多显示 `PAGER_COUNT - 2` 个页码：
//!
//! ```text
//!   总页数 ≤ 7           1 [2 3 4 5 6] 7
//!   靠近首页             1 [2 3 4 5 6] … 20
//!   靠近末页             1 … [15 16 17 18 19] 20
//!   中间位置             1 … [8 9 10 11 12] … 20
//! ```

use crate::types::{PageWindow, PAGER_COUNT};

/// 计算可见页码窗口
///
/// `page_count` 至少按 1 处理，`current_page` 先限制在 `[1, page_count]` 内，
/// 结果与 `[2, page_count - 1]` 取交集，因此窗口内不会出现越界页码。
#[must_use]
pub fn generate_pagers(current_page: u32, page_count: u32) -> PageWindow {
    let page_count = page_count.max(1);
    let current_page = current_page.clamp(1, page_count);

    if page_count <= PAGER_COUNT {
        return PageWindow {
            pages: (2..page_count).collect(),
            show_prev_more: false,
            show_next_more: false,
        };
    }

    let show_prev_more = current_page > PAGER_COUNT - 3;
    let show_next_more = current_page < page_count - 3;

    let range = match (show_prev_more, show_next_more) {
        // 靠近末页
        (true, false) => {
            let start_page = page_count - (PAGER_COUNT - 2);
            start_page..page_count
        }
        // 中间位置：以当前页为中心
        (true, true) => {
            let offset = PAGER_COUNT / 2 - 1;
            (current_page - offset)..(current_page + offset + 1)
        }
        // 靠近首页
        _ => 2..PAGER_COUNT,
    };

    PageWindow {
        pages: range.filter(|p| *p > 1 && *p < page_count).collect(),
        show_prev_more,
        show_next_more,
    }
}
