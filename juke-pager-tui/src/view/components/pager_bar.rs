//! 分页条面板

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, PagerItem};
use crate::view::theme::{colors, Styles};

/// 一段待绘制的文字
struct Segment {
    text: String,
    style: Style,
    focused: bool,
}

/// 按显示顺序生成分页条的各段文字
fn segments(app: &App) -> Vec<Segment> {
    let options = app.pager.options();
    let focused = app.focused_item();
    let mut out = Vec::new();

    for (index, item) in app.items().into_iter().enumerate() {
        let is_focused = index == app.focus;

        if item == PagerItem::JumpInput {
            out.push(Segment {
                text: format!("共有{} 页 到", options.page_count),
                style: Style::default().fg(colors().muted),
                focused: false,
            });
        }

        let style = if is_focused {
            Styles::focused()
        } else if item.is_disabled(options) {
            Styles::disabled()
        } else if item.is_active(options) {
            Styles::active()
        } else {
            Style::default().fg(colors().fg)
        };

        out.push(Segment {
            text: item.label(options, app.size_index, &app.page_input, focused == Some(item)),
            style,
            focused: is_focused,
        });
    }
    out
}

/// 分页条文字行，以及焦点元素所在的列区间 `(起始列, 宽度)`
pub fn bar_line(app: &App) -> (Line<'static>, Option<(usize, usize)>) {
    let mut spans = Vec::new();
    let mut column = 0;
    let mut focus_span = None;

    for (i, segment) in segments(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
            column += 1;
        }
        let width = segment.text.width();
        if segment.focused {
            focus_span = Some((column, width));
        }
        column += width;
        spans.push(Span::styled(segment.text, segment.style));
    }

    (Line::from(spans), focus_span)
}

/// 渲染分页条
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(" Pager ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let lines = if app.items().is_empty() {
        vec![Line::styled(
            "(only one page, the pager is hidden)",
            Style::default().fg(c.muted),
        )]
    } else {
        let (line, focus) = bar_line(app);
        let marker = focus.map_or_else(String::new, |(start, width)| {
            format!("{}{}", " ".repeat(start), "▔".repeat(width.max(1)))
        });
        vec![
            line,
            Line::styled(marker, Style::default().fg(c.highlight)),
        ]
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
