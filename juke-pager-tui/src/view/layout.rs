//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 分页条 + 下方面板 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(4), // 分页条
            Constraint::Min(1),    // 标记与事件日志
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::pager_bar::render(app, frame, main_layout[1]);

    if app.show_markup {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_layout[2]);
        components::markup::render(app, frame, columns[0]);
        components::event_log::render(app, frame, columns[1]);
    } else {
        components::event_log::render(app, frame, main_layout[2]);
    }

    components::statusbar::render(app, frame, main_layout[3]);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let options = app.pager.options();
    let title = format!(
        " juke-pager v{}  ·  {}  ·  page {}/{}  ·  {} per page",
        env!("CARGO_PKG_VERSION"),
        options.el,
        options.current_page,
        options.page_count,
        options.page_size,
    );
    frame.render_widget(
        Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg)),
        area,
    );
}
