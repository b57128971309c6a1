use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Tab;
use crate::theme::ThemeColors;

/// 渲染空状态提示
pub fn render(frame: &mut Frame, area: Rect, current_tab: Tab, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let message = format!("No tasks found for {}", current_tab.label());

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " n ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add a task", Style::default().fg(colors.text)),
        ]),
    ];

    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);

    // 垂直居中
    let text_height = 3u16;
    let y_offset = (inner_area.height.saturating_sub(text_height)) / 2;
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + y_offset,
        width: inner_area.width,
        height: text_height.min(inner_area.height),
    };

    frame.render_widget(hint_widget, centered_area);
}
