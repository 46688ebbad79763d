//! 分页器 HTML 渲染
//!
//! 每次渲染都生成完整的标记并整体替换容器内容，不做差异比较。

use std::fmt::Write;

use crate::types::{PageWindow, PagerOptions};
use crate::utils::html::escape;
use crate::utils::ClassList;

/// 分页器标记中使用的 class 与 id
pub mod class_names {
    pub const PAGER: &str = "juke-pager pager-wrapper";
    pub const HIDE: &str = "hide";
    pub const DISABLED: &str = "disabled";
    pub const ACTIVE: &str = "active";
    pub const NUMBER: &str = "number";
    pub const NUMBER_ITEM: &str = "juke-number number";
    pub const PREV_PAGE: &str = "prev-page";
    pub const NEXT_PAGE: &str = "next-page";
    pub const QUICK_PREV: &str = "btn-quickprev";
    pub const QUICK_NEXT: &str = "btn-quicknext";
    pub const QUICK_PREV_ITEM: &str = "more btn-quickprev quick-prev-btn juke-icon-more";
    pub const QUICK_NEXT_ITEM: &str = "more btn-quicknext quick-next-btn juke-icon-more";
    pub const QUICK_PREV_BTN: &str = "quick-prev-btn";
    pub const QUICK_NEXT_BTN: &str = "quick-next-btn";
    /// 鼠标悬停在快速跳页按钮上时追加的图标
    pub const QUICK_PREV_HOVER: &str = "juke-icon-d-arrow-left";
    pub const QUICK_NEXT_HOVER: &str = "juke-icon-d-arrow-right";
    pub const PAGE_CONTENT: &str = "page-content";
    pub const TO_PAGE: &str = "to-page";
    pub const PAGE_INPUT: &str = "page-input serch-input juke-text-xs line-h";
    pub const CONFIRM_BTN: &str = "confirm-btn";
    pub const SELECT_OPTION: &str = "select-option";

    pub const PAGE_INPUT_ID: &str = "page-input";
    pub const SELECT_OPTION_ID: &str = "select-option";
}

use class_names as cn;

/// 生成分页器完整标记
#[must_use]
pub fn render_markup(options: &PagerOptions, window: &PageWindow) -> String {
    let page_count = options.page_count;
    let current_page = options.effective_current_page();
    let step = options.effective_page_step();
    let single_page = options.is_single_page();

    let mut out = String::new();

    let mut ul = ClassList::parse(cn::PAGER);
    ul.toggle(cn::HIDE, single_page);
    let _ = writeln!(out, r#"<ul class="{ul}">"#);

    if options.has_select_page_size && !options.page_sizes.is_empty() {
        let _ = writeln!(out, "{}", render_page_sizes(options));
    }

    let mut prev = ClassList::parse(cn::PREV_PAGE);
    prev.toggle(cn::DISABLED, current_page == 1);
    let _ = writeln!(
        out,
        r#"<li class="{prev}" title="上一页">{}</li>"#,
        escape(&options.prev_text)
    );

    let _ = writeln!(out, "{}", number_item(1, current_page, false));

    let mut quick_prev = ClassList::parse(cn::QUICK_PREV_ITEM);
    quick_prev.toggle(cn::HIDE, !window.show_prev_more);
    let _ = writeln!(out, r#"<li class="{quick_prev}" title="上{step}页"></li>"#);

    let pagers: String = window
        .pages
        .iter()
        .map(|page| number_item(*page, current_page, false))
        .collect();
    let _ = writeln!(out, r#"<span class="{}">{pagers}</span>"#, cn::PAGE_CONTENT);

    let mut quick_next = ClassList::parse(cn::QUICK_NEXT_ITEM);
    quick_next.toggle(cn::HIDE, !window.show_next_more);
    let _ = writeln!(out, r#"<li class="{quick_next}" title="下{step}页"></li>"#);

    let _ = writeln!(out, "{}", number_item(page_count, current_page, single_page));

    let mut next = ClassList::parse(cn::NEXT_PAGE);
    next.toggle(cn::DISABLED, current_page >= page_count);
    let _ = writeln!(
        out,
        r#"<li class="{next}" title="下一页">{}</li>"#,
        escape(&options.next_text)
    );

    let mut to_page = ClassList::parse(cn::TO_PAGE);
    to_page.toggle(cn::HIDE, !options.has_to_page);
    let _ = writeln!(
        out,
        r#"<span class="{to_page}">共有{page_count} 页 到 <input type="number" value="{current_page}" min="1" max="{page_count}" class="{}" id="{}"> 页, <span class="{}">确定</span></span>"#,
        cn::PAGE_INPUT,
        cn::PAGE_INPUT_ID,
        cn::CONFIRM_BTN,
    );

    out.push_str("</ul>");
    out
}

/// 每页条数下拉框
fn render_page_sizes(options: &PagerOptions) -> String {
    let size_options: String = options
        .page_sizes
        .iter()
        .map(|size| {
            if *size == options.page_size {
                format!(r#"<option value="{size}" selected="selected">{size}条 / 页</option>"#)
            } else {
                format!(r#"<option value="{size}">{size}条 / 页</option>"#)
            }
        })
        .collect();
    format!(
        r#"<select class="{}" id="{}" style="width: 120px;">{size_options}</select>"#,
        cn::SELECT_OPTION,
        cn::SELECT_OPTION_ID,
    )
}

/// 单个页码按钮
fn number_item(page: u32, current_page: u32, hidden: bool) -> String {
    let mut classes = ClassList::parse(cn::NUMBER_ITEM);
    classes.toggle(cn::HIDE, hidden);
    classes.toggle(cn::ACTIVE, page == current_page);
    format!(r#"<li class="{classes}" data-page="{page}" title="第{page}页">{page}</li>"#)
}
