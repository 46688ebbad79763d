//! 标记面板：显示分页器最近一次渲染到容器中的 HTML

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染标记面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let container = app.pager.container();
    let block = Block::default()
        .title(format!(" Markup (render #{}) ", container.render_count()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let lines: Vec<Line<'_>> = container
        .markup()
        .lines()
        .map(|line| Line::styled(line, Style::default().fg(c.fg)))
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
