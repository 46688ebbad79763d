//! 分页条消息处理

use juke_pager_core::{PagerEvent, PagerOptionsPatch};

use crate::message::PagerMessage;
use crate::model::{App, PagerItem};

/// 处理分页条消息
pub fn update(app: &mut App, msg: PagerMessage) {
    let last = app.items().len().saturating_sub(1);

    match msg {
        PagerMessage::FocusPrevious => {
            app.focus = app.focus.saturating_sub(1);
        }
        PagerMessage::FocusNext => {
            app.focus = (app.focus + 1).min(last);
        }
        PagerMessage::FocusFirst => {
            app.focus = 0;
        }
        PagerMessage::FocusLast => {
            app.focus = last;
        }
        PagerMessage::Activate => {
            if let Some(item) = app.focused_item() {
                activate(app, item);
            }
        }
        PagerMessage::Input(c) => {
            if c.is_ascii_digit() {
                app.page_input.push(c);
                // 与浏览器中输入框的 change 一样：超过总页数时改为总页数
                app.page_input = app.pager.page_input_changed(&app.page_input);
            }
        }
        PagerMessage::Backspace => {
            app.page_input.pop();
        }
        PagerMessage::SubmitInput => click(app, PagerItem::Confirm),
        PagerMessage::PreviousPageSize => {
            app.size_index = app.size_index.saturating_sub(1);
            click(app, PagerItem::PageSize);
        }
        PagerMessage::NextPageSize => {
            let last_size = app.pager.options().page_sizes.len().saturating_sub(1);
            app.size_index = (app.size_index + 1).min(last_size);
            click(app, PagerItem::PageSize);
        }
    }
}

/// Enter 在不同元素上的含义
fn activate(app: &mut App, item: PagerItem) {
    match item {
        // 输入框上按 Enter 等同于点击「确定」
        PagerItem::JumpInput => update(app, PagerMessage::SubmitInput),
        // 下拉框上按 Enter 切换到下一档
        PagerItem::PageSize => update(app, PagerMessage::NextPageSize),
        _ => click(app, item),
    }
}

/// 模拟一次点击，并作为宿主响应触发的事件
fn click(app: &mut App, item: PagerItem) {
    let target = item.click_target(app.pager.options(), app.size_index, &app.page_input);

    let events = match app.pager.click(&target) {
        Ok(events) => events,
        Err(err) => {
            app.set_status(err.to_string());
            return;
        }
    };

    if events.is_empty() {
        app.clear_status();
        return;
    }

    for event in &events {
        follow(app, *event);
    }
    app.sync_with_pager(Some(item));
}

/// 宿主对事件的响应
fn follow(app: &mut App, event: PagerEvent) {
    match event {
        PagerEvent::ChangePage(page) => {
            app.pager.refresh(&PagerOptionsPatch::page(page));
            let options = app.pager.options();
            let status = format!("Page {} of {}", options.current_page, options.page_count);
            app.set_status(status);
        }
        PagerEvent::ChangePageSize(size) => {
            app.pager.refresh(&PagerOptionsPatch {
                page_size: Some(size),
                current_page: Some(1),
                ..PagerOptionsPatch::default()
            });
            app.set_status(format!("{size} items per page"));
        }
    }
}
