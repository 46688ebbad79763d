//! 点击事件解析
//!
//! 将被点击元素（class、`data-page`、下拉框选中项、跳页输入框的值）
//! 翻译成分页事件。判断顺序：
//!
//! ```text
//!   select-option   → changePageSize（与当前条数不同才触发）
//!   confirm-btn     → 跳页输入框的值
//!   disabled        → 结束，不再触发任何页码事件
//!   number          → data-page（等于当前页时忽略）
//!   prev / next     → 当前页 ∓ 1
//!   quickprev/next  → 当前页 ∓ page_step，限制在 [1, page_count]
//! ```
//!
//! 分页器是受控组件：触发 `changePage` 并不会改变当前页，
//! 由宿主在回调中调用 `refresh` 更新。

use crate::error::PagerResult;
use crate::types::{PagerEvent, PagerOptions};
use crate::utils::ClassList;

use super::render_service::class_names as cn;

/// 被点击的元素
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// 元素的 class 属性
    pub class_name: String,
    /// 页码按钮的 `data-page`
    pub data_page: Option<String>,
    /// 每页条数下拉框的选中下标
    pub selected_index: Option<usize>,
    /// 点击时跳页输入框中的值
    pub input_value: Option<String>,
}

impl ClickTarget {
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    /// 页码按钮
    #[must_use]
    pub fn number(page: u32) -> Self {
        Self::new(cn::NUMBER_ITEM).with_data_page(page.to_string())
    }

    #[must_use]
    pub fn with_data_page(mut self, page: impl Into<String>) -> Self {
        self.data_page = Some(page.into());
        self
    }

    #[must_use]
    pub fn with_selected_index(mut self, index: usize) -> Self {
        self.selected_index = Some(index);
        self
    }

    #[must_use]
    pub fn with_input_value(mut self, value: impl Into<String>) -> Self {
        self.input_value = Some(value.into());
        self
    }
}

/// 解析一次点击，返回应触发的事件（按触发顺序）
pub fn resolve_click(options: &PagerOptions, target: &ClickTarget) -> PagerResult<Vec<PagerEvent>> {
    let classes = ClassList::parse(&target.class_name);
    let current_page = options.effective_current_page();
    let page_count = options.effective_page_count();
    let page_step = options.effective_page_step();

    let mut events = Vec::new();
    let mut page_index: Option<u32> = None;

    if classes.has(cn::SELECT_OPTION)? {
        let size = target
            .selected_index
            .and_then(|i| options.page_sizes.get(i))
            .copied();
        if let Some(size) = size.filter(|s| *s != options.page_size) {
            events.push(PagerEvent::ChangePageSize(size));
        }
    }

    if classes.has(cn::CONFIRM_BTN)? {
        page_index = target
            .input_value
            .as_deref()
            .and_then(|v| parse_page_input(v, page_count));
    }

    if classes.has(cn::DISABLED)? {
        return Ok(events);
    }

    if classes.has(cn::NUMBER)? {
        page_index = target
            .data_page
            .as_deref()
            .and_then(|p| p.trim().parse().ok());
        // 点击当前页不触发
        if page_index == Some(current_page) {
            return Ok(events);
        }
    }

    if classes.has(cn::PREV_PAGE)? {
        page_index = Some(current_page - 1);
    }
    if classes.has(cn::NEXT_PAGE)? {
        page_index = (current_page < page_count).then_some(current_page + 1);
    }

    if classes.has(cn::QUICK_PREV)? {
        page_index = Some(current_page.saturating_sub(page_step).max(1));
    }
    if classes.has(cn::QUICK_NEXT)? {
        page_index = Some(current_page.saturating_add(page_step).min(page_count));
    }

    if let Some(page) = page_index.filter(|p| *p >= 1) {
        events.push(PagerEvent::ChangePage(page));
    }

    Ok(events)
}

/// 解析跳页输入框的值，限制在 `[1, page_count]` 内；无法解析时返回 `None`
#[must_use]
pub fn parse_page_input(value: &str, page_count: u32) -> Option<u32> {
    let n: i64 = value.trim().parse().ok()?;
    let clamped = n.clamp(1, i64::from(page_count.max(1)));
    u32::try_from(clamped).ok()
}

/// 跳页输入框 `change` 时的修正：超过总页数的值改为总页数
#[must_use]
pub fn clamp_page_input(value: &str, page_count: u32) -> String {
    let page_count = page_count.max(1);
    match value.trim().parse::<i64>() {
        Ok(n) if n > i64::from(page_count) => page_count.to_string(),
        _ => value.to_string(),
    }
}

/// 快速跳页按钮悬停时应追加的图标 class，其他元素返回 `None`
#[must_use]
pub fn hover_icon(class_name: &str) -> Option<&'static str> {
    let classes = ClassList::parse(class_name);
    if matches!(classes.has(cn::QUICK_PREV_BTN), Ok(true)) {
        Some(cn::QUICK_PREV_HOVER)
    } else if matches!(classes.has(cn::QUICK_NEXT_BTN), Ok(true)) {
        Some(cn::QUICK_NEXT_HOVER)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(current: u32, count: u32, target: ClickTarget) -> Vec<PagerEvent> {
        resolve_click(&PagerOptions::new(current, count), &target).unwrap()
    }

    #[test]
    fn number_click_changes_page() {
        assert_eq!(click(5, 20, ClickTarget::number(8)), vec![PagerEvent::ChangePage(8)]);
    }

    #[test]
    fn number_click_on_current_page_is_suppressed() {
        assert!(click(5, 20, ClickTarget::number(5)).is_empty());
        let active = ClickTarget::new("juke-number number active").with_data_page("5");
        assert!(click(5, 20, active).is_empty());
    }

    #[test]
    fn prev_and_next_move_by_one() {
        assert_eq!(click(5, 20, ClickTarget::new("prev-page")), vec![PagerEvent::ChangePage(4)]);
        assert_eq!(click(5, 20, ClickTarget::new("next-page")), vec![PagerEvent::ChangePage(6)]);
    }

    #[test]
    fn disabled_arrows_do_nothing() {
        assert!(click(1, 20, ClickTarget::new("prev-page disabled")).is_empty());
        assert!(click(20, 20, ClickTarget::new("next-page disabled")).is_empty());
    }

    #[test]
    fn arrows_past_the_ends_emit_nothing() {
        assert!(click(1, 20, ClickTarget::new("prev-page")).is_empty());
        assert!(click(20, 20, ClickTarget::new("next-page")).is_empty());
    }

    #[test]
    fn quick_jumps_are_clamped() {
        let quick_prev = ClickTarget::new("more btn-quickprev quick-prev-btn juke-icon-more");
        let quick_next = ClickTarget::new("more btn-quicknext quick-next-btn juke-icon-more");
        assert_eq!(click(10, 20, quick_prev.clone()), vec![PagerEvent::ChangePage(5)]);
        assert_eq!(click(3, 20, quick_prev.clone()), vec![PagerEvent::ChangePage(1)]);
        assert_eq!(click(10, 20, quick_next.clone()), vec![PagerEvent::ChangePage(15)]);
        assert_eq!(click(18, 20, quick_next), vec![PagerEvent::ChangePage(20)]);
        // 跳到与当前页相同的位置也照常触发
        assert_eq!(click(1, 20, quick_prev), vec![PagerEvent::ChangePage(1)]);
    }

    #[test]
    fn quick_next_to_same_page_is_not_suppressed() {
        let quick_next = ClickTarget::new("btn-quicknext");
        assert_eq!(click(20, 20, quick_next), vec![PagerEvent::ChangePage(20)]);
    }

    #[test]
    fn confirm_uses_input_value() {
        let confirm = ClickTarget::new("confirm-btn").with_input_value("12");
        assert_eq!(click(5, 20, confirm), vec![PagerEvent::ChangePage(12)]);

        let confirm = ClickTarget::new("confirm-btn").with_input_value("99");
        assert_eq!(click(5, 20, confirm), vec![PagerEvent::ChangePage(20)]);

        let confirm = ClickTarget::new("confirm-btn").with_input_value("5");
        assert_eq!(click(5, 20, confirm), vec![PagerEvent::ChangePage(5)]);
    }

    #[test]
    fn confirm_with_garbage_input_emits_nothing() {
        let confirm = ClickTarget::new("confirm-btn").with_input_value("abc");
        assert!(click(5, 20, confirm).is_empty());
        assert!(click(5, 20, ClickTarget::new("confirm-btn")).is_empty());
    }

    #[test]
    fn select_emits_page_size_only_when_changed() {
        let options = PagerOptions::new(1, 20);
        let select = ClickTarget::new("select-option").with_selected_index(2);
        assert_eq!(
            resolve_click(&options, &select).unwrap(),
            vec![PagerEvent::ChangePageSize(20)]
        );

        let same = ClickTarget::new("select-option").with_selected_index(0);
        assert!(resolve_click(&options, &same).unwrap().is_empty());

        let out_of_range = ClickTarget::new("select-option").with_selected_index(9);
        assert!(resolve_click(&options, &out_of_range).unwrap().is_empty());
    }

    #[test]
    fn unrelated_targets_emit_nothing() {
        assert!(click(5, 20, ClickTarget::new("page-content")).is_empty());
        assert!(click(5, 20, ClickTarget::default()).is_empty());
    }

    #[test]
    fn hover_icons_only_for_quick_buttons() {
        assert_eq!(hover_icon(cn::QUICK_PREV_ITEM), Some(cn::QUICK_PREV_HOVER));
        assert_eq!(hover_icon(cn::QUICK_NEXT_ITEM), Some(cn::QUICK_NEXT_HOVER));
        assert_eq!(hover_icon("prev-page"), None);
        assert_eq!(hover_icon(""), None);
    }

    #[test]
    fn input_helpers() {
        assert_eq!(parse_page_input(" 7 ", 20), Some(7));
        assert_eq!(parse_page_input("0", 20), Some(1));
        assert_eq!(parse_page_input("-3", 20), Some(1));
        assert_eq!(parse_page_input("", 20), None);

        assert_eq!(clamp_page_input("25", 20), "20");
        assert_eq!(clamp_page_input("3", 20), "3");
        assert_eq!(clamp_page_input("", 20), "");
        assert_eq!(clamp_page_input("5", 0), "1");
    }
}
