//! 分页条元素
//!
//! 终端里没有 DOM，分页条被展开成一组可聚焦的元素，
//! 顺序与渲染出的标记一致。每个元素都能给出自己的 class 列表，
//! 激活时据此构造 `ClickTarget` 交给核心库解析，和浏览器里的点击走同一条路径。

use juke_pager_core::services::{class_names as cn, hover_icon};
use juke_pager_core::utils::ClassList;
use juke_pager_core::{ClickTarget, PageWindow, PagerOptions};

/// 分页条上的可聚焦元素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    /// 每页条数下拉框
    PageSize,
    /// 上一页
    Prev,
    /// 页码按钮
    Number(u32),
    /// 向前快速跳页
    QuickPrev,
    /// 向后快速跳页
    QuickNext,
    /// 下一页
    Next,
    /// 跳页输入框
    JumpInput,
    /// 「确定」按钮
    Confirm,
}

impl PagerItem {
    /// 按显示顺序列出当前可见的元素
    ///
    /// 只有一页时分页器整体隐藏，返回空列表。
    pub fn layout(options: &PagerOptions, window: &PageWindow) -> Vec<Self> {
        if options.is_single_page() {
            return Vec::new();
        }

        let mut items = Vec::new();
        if options.has_select_page_size && !options.page_sizes.is_empty() {
            items.push(Self::PageSize);
        }
        items.push(Self::Prev);
        items.push(Self::Number(1));
        if window.show_prev_more {
            items.push(Self::QuickPrev);
        }
        items.extend(window.pages.iter().copied().map(Self::Number));
        if window.show_next_more {
            items.push(Self::QuickNext);
        }
        items.push(Self::Number(options.page_count));
        items.push(Self::Next);
        if options.has_to_page {
            items.push(Self::JumpInput);
            items.push(Self::Confirm);
        }
        items
    }

    /// 该元素在标记中的 class 列表
    pub fn class_list(&self, options: &PagerOptions) -> ClassList {
        let mut classes = ClassList::parse(match self {
            Self::PageSize => cn::SELECT_OPTION,
            Self::Prev => cn::PREV_PAGE,
            Self::Number(_) => cn::NUMBER_ITEM,
            Self::QuickPrev => cn::QUICK_PREV_ITEM,
            Self::QuickNext => cn::QUICK_NEXT_ITEM,
            Self::Next => cn::NEXT_PAGE,
            Self::JumpInput => cn::PAGE_INPUT,
            Self::Confirm => cn::CONFIRM_BTN,
        });
        match self {
            Self::Prev => classes.toggle(cn::DISABLED, options.is_first_page()),
            Self::Next => classes.toggle(cn::DISABLED, options.is_last_page()),
            Self::Number(page) => {
                classes.toggle(cn::ACTIVE, *page == options.effective_current_page());
            }
            _ => {}
        }
        classes
    }

    /// 激活该元素时的点击目标
    pub fn click_target(
        &self,
        options: &PagerOptions,
        size_index: usize,
        input: &str,
    ) -> ClickTarget {
        let target = ClickTarget::new(self.class_list(options).to_string()).with_input_value(input);
        match self {
            Self::Number(page) => target.with_data_page(page.to_string()),
            Self::PageSize => target.with_selected_index(size_index),
            _ => target,
        }
    }

    pub fn is_disabled(&self, options: &PagerOptions) -> bool {
        matches!(self.class_list(options).has(cn::DISABLED), Ok(true))
    }

    pub fn is_active(&self, options: &PagerOptions) -> bool {
        matches!(self.class_list(options).has(cn::ACTIVE), Ok(true))
    }

    /// 显示文字；`hovered` 为真时快速跳页按钮显示箭头
    pub fn label(
        &self,
        options: &PagerOptions,
        size_index: usize,
        input: &str,
        hovered: bool,
    ) -> String {
        match self {
            Self::PageSize => {
                let size = options
                    .page_sizes
                    .get(size_index)
                    .copied()
                    .unwrap_or(options.page_size);
                format!("{size}条/页 ▾")
            }
            Self::Prev => options.prev_text.clone(),
            Self::Next => options.next_text.clone(),
            Self::Number(page) => page.to_string(),
            Self::QuickPrev | Self::QuickNext => {
                let icon = hovered
                    .then(|| hover_icon(&self.class_list(options).to_string()))
                    .flatten();
                match icon {
                    Some(cn::QUICK_PREV_HOVER) => "<<".to_string(),
                    Some(cn::QUICK_NEXT_HOVER) => ">>".to_string(),
                    _ => "…".to_string(),
                }
            }
            Self::JumpInput => format!("[{input:>3}]"),
            Self::Confirm => "确定".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juke_pager_core::services::resolve_click;
    use juke_pager_core::{generate_pagers, PagerEvent};
    use pretty_assertions::assert_eq;

    fn layout(current: u32, count: u32) -> Vec<PagerItem> {
        let options = PagerOptions::new(current, count);
        PagerItem::layout(&options, &generate_pagers(current, count))
    }

    #[test]
    fn layout_follows_markup_order() {
        use PagerItem as I;
        assert_eq!(
            layout(10, 20),
            vec![
                I::PageSize,
                I::Prev,
                I::Number(1),
                I::QuickPrev,
                I::Number(8),
                I::Number(9),
                I::Number(10),
                I::Number(11),
                I::Number(12),
                I::QuickNext,
                I::Number(20),
                I::Next,
                I::JumpInput,
                I::Confirm,
            ]
        );
    }

    #[test]
    fn single_page_has_no_items() {
        assert!(layout(1, 1).is_empty());
    }

    #[test]
    fn arrows_disabled_at_the_ends() {
        let first = PagerOptions::new(1, 20);
        assert!(PagerItem::Prev.is_disabled(&first));
        assert!(!PagerItem::Next.is_disabled(&first));
        assert!(PagerItem::Number(1).is_active(&first));

        let last = PagerOptions::new(20, 20);
        assert!(PagerItem::Next.is_disabled(&last));
    }

    #[test]
    fn click_targets_resolve_like_dom_clicks() {
        let options = PagerOptions::new(5, 20);
        let events = |item: PagerItem, input: &str| {
            resolve_click(&options, &item.click_target(&options, 2, input)).unwrap()
        };
        assert_eq!(events(PagerItem::Number(7), ""), vec![PagerEvent::ChangePage(7)]);
        assert_eq!(events(PagerItem::QuickNext, ""), vec![PagerEvent::ChangePage(10)]);
        assert_eq!(events(PagerItem::Confirm, "12"), vec![PagerEvent::ChangePage(12)]);
        assert_eq!(events(PagerItem::PageSize, ""), vec![PagerEvent::ChangePageSize(20)]);
        assert!(events(PagerItem::JumpInput, "12").is_empty());
    }

    #[test]
    fn quick_buttons_show_arrows_when_hovered() {
        let options = PagerOptions::new(10, 20);
        assert_eq!(PagerItem::QuickPrev.label(&options, 0, "", false), "…");
        assert_eq!(PagerItem::QuickPrev.label(&options, 0, "", true), "<<");
        assert_eq!(PagerItem::QuickNext.label(&options, 0, "", true), ">>");
        assert_eq!(PagerItem::PageSize.label(&options, 1, "", false), "10条/页 ▾");
    }
}
