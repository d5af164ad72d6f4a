//! Chord cards - one column per chord of the scale

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use tonal_keys::theory::ChordInfo;

pub fn render_chords(frame: &mut Frame, area: Rect, chords: &[ChordInfo], selected: usize) {
    let block = Block::default().title(" Chords ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if chords.is_empty() {
        frame.render_widget(
            Paragraph::new("no chords in this scale").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, chords.len() as u32); chords.len()])
        .split(inner);

    for (i, (chord, column)) in chords.iter().zip(columns.iter()).enumerate() {
        let is_selected = i == selected;
        let border = if is_selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let card = Block::default()
            .title(format!(" {} ", chord.roman))
            .borders(Borders::ALL)
            .border_style(border);

        let lines = vec![
            Line::from(Span::styled(
                chord.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                chord.notes.join(" "),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(Span::styled(
                chord.caption().to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(card).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *column);
    }
}
