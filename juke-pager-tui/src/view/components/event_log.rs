//! 事件日志面板

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, LogEntry};
use crate::view::theme::colors;

fn entry_line(entry: &LogEntry) -> Line<'static> {
    Line::styled(entry.line(), Style::default().fg(colors().success))
}

/// 渲染事件日志（新的在上）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(format!(" Events ({}) ", app.event_log.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let visible = usize::from(area.height.saturating_sub(2));
    let lines: Vec<Line<'static>> = app.event_log.recent(visible).iter().map(entry_line).collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
