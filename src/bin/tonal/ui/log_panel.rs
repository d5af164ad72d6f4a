use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logger;

/// Render the most recent log lines that fit
pub fn render_log(frame: &mut Frame, area: Rect) {
    let block = Block::default().title(" Log ").borders(Borders::ALL);
    let visible = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = logger::recent(visible)
        .into_iter()
        .map(|line| {
            let color = if line.starts_with("ERROR") || line.starts_with("WARN") {
                Color::Red
            } else {
                Color::DarkGray
            };
            Line::styled(line, Style::default().fg(color))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
