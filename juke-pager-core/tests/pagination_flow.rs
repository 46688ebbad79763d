#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the host driven pagination flow.

use std::cell::RefCell;
use std::rc::Rc;

use juke_pager_core::services::class_names;
use juke_pager_core::{
    generate_pagers, ClickTarget, InMemoryContainer, InMemoryDocument, PagerError, PagerEvent,
    PagerEventType, PagerOptions, PagerOptionsPatch, Pagination,
};
use pretty_assertions::assert_eq;

fn mounted(current: u32, count: u32) -> Pagination<InMemoryContainer> {
    let doc = InMemoryDocument::with_selectors([".page"]);
    let options = PagerOptions {
        el: ".page".to_string(),
        ..PagerOptions::new(current, count)
    };
    Pagination::mount(options, &doc).expect("container exists")
}

/// Simulates a host that follows every `changePage` with a refresh.
fn click_and_follow(pager: &mut Pagination<InMemoryContainer>, target: &ClickTarget) {
    for event in pager.click(target).unwrap() {
        match event {
            PagerEvent::ChangePage(page) => pager.refresh(&PagerOptionsPatch::page(page)),
            PagerEvent::ChangePageSize(size) => pager.refresh(&PagerOptionsPatch {
                page_size: Some(size),
                current_page: Some(1),
                ..PagerOptionsPatch::default()
            }),
        }
    }
}

#[test]
fn window_examples() {
    let w = generate_pagers(1, 20);
    assert_eq!((w.show_prev_more, w.show_next_more), (false, true));
    assert_eq!(w.pages, vec![2, 3, 4, 5, 6]);

    let w = generate_pagers(20, 20);
    assert_eq!((w.show_prev_more, w.show_next_more), (true, false));
    assert_eq!(w.pages, vec![15, 16, 17, 18, 19]);

    let w = generate_pagers(10, 20);
    assert_eq!((w.show_prev_more, w.show_next_more), (true, true));
    assert_eq!(w.pages, vec![8, 9, 10, 11, 12]);
}

#[test]
fn missing_wrapper_fails_construction() {
    let doc = InMemoryDocument::new();
    let result = Pagination::mount(PagerOptions::new(1, 3), &doc);
    assert!(matches!(result, Err(PagerError::MissingContainer(ref el)) if el == "body"));
}

#[test]
fn refresh_reflects_merged_config_not_original() {
    let mut pager = mounted(5, 20);
    pager.refresh(&PagerOptionsPatch {
        current_page: Some(2),
        page_count: Some(30),
        ..PagerOptionsPatch::default()
    });

    let markup = pager.container().markup();
    assert!(markup.contains("共有30 页"));
    assert!(markup.contains(r#"data-page="30""#));
    assert!(!markup.contains(r#"data-page="20""#));
    assert_eq!(pager.options().page_step, 5);
}

#[test]
fn host_follows_navigation() {
    let mut pager = mounted(5, 20);

    click_and_follow(&mut pager, &ClickTarget::new(class_names::NEXT_PAGE));
    assert_eq!(pager.options().current_page, 6);

    click_and_follow(&mut pager, &ClickTarget::new(class_names::QUICK_NEXT_ITEM));
    assert_eq!(pager.options().current_page, 11);
    assert_eq!(pager.window().pages, vec![9, 10, 11, 12, 13]);

    click_and_follow(&mut pager, &ClickTarget::number(20));
    assert_eq!(pager.options().current_page, 20);
    assert!(pager
        .container()
        .markup()
        .contains(r#"<li class="next-page disabled""#));

    click_and_follow(
        &mut pager,
        &ClickTarget::new(class_names::CONFIRM_BTN).with_input_value("3"),
    );
    assert_eq!(pager.options().current_page, 3);
}

#[test]
fn same_page_suppression_only_applies_to_number_clicks() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut pager = mounted(20, 20);
    let sink = Rc::clone(&seen);
    pager.on(PagerEventType::ChangePage, move |p| sink.borrow_mut().push(p));

    pager.click(&ClickTarget::number(20)).unwrap();
    assert!(seen.borrow().is_empty());

    pager
        .click(&ClickTarget::new(class_names::QUICK_NEXT))
        .unwrap();
    assert_eq!(*seen.borrow(), vec![20]);
}

#[test]
fn page_size_change_is_reported_then_applied_by_host() {
    let mut pager = mounted(7, 20);
    let select = ClickTarget::new(class_names::SELECT_OPTION).with_selected_index(3);

    click_and_follow(&mut pager, &select);
    assert_eq!(pager.options().page_size, 50);
    assert_eq!(pager.options().current_page, 1);
    assert!(pager
        .container()
        .markup()
        .contains(r#"<option value="50" selected="selected">"#));
}
