//! TUI module for tonal
//!
//! Scale header, two-octave keyboard, chord cards, the chord loop and a log
//! panel.

mod chords;
mod chord_loop;
mod keyboard;
mod log_panel;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use tonal_keys::theory::{root_choice_index, ScaleType, ROOT_CHOICES};

use super::app::App;

use chord_loop::render_chord_loop;
use chords::render_chords;
use keyboard::render_keyboard;
use log_panel::render_log;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Scale header
            Constraint::Length(7), // Keyboard
            Constraint::Min(7),    // Chord cards
            Constraint::Length(8), // Loop + log
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_keyboard(frame, chunks[1], &app.keyboard());
    render_chords(frame, chunks[2], &app.scale().chords, app.selected());

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[3]);
    render_chord_loop(
        frame,
        bottom[0],
        app.chord_loop(),
        app.playback(),
        app.progression().map(|p| p.name.as_str()),
    );
    render_log(frame, bottom[1]);

    let help = Paragraph::new(
        " [←/→] Chord  [Enter] Play  [+] Add  [-] Remove  [Del] Clear  [P] Progression  [Space] Loop  [z..m q..u] Keys  [Esc] Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

fn render_header(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let scale = app.scale();
    let block = Block::default()
        .title(format!(" {} ", scale.scale_name))
        .borders(Borders::ALL);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{}  ", scale.notes.join(" ")),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(scale.description.clone(), Style::default().fg(Color::White)),
    ])];
    lines.push(picker_line(
        "Root  ",
        ROOT_CHOICES.iter().copied(),
        root_choice_index(&scale.root),
    ));
    lines.push(picker_line(
        "Scale ",
        ScaleType::SELECTABLE.iter().map(|t| t.label()),
        scale.kind().and_then(ScaleType::picker_index),
    ));
    if let Some(status) = app.status() {
        lines.push(Line::from(Span::styled(
            format!("audio: {}", status),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// One row of choices with the current one highlighted
fn picker_line<'a>(
    title: &'a str,
    choices: impl Iterator<Item = &'a str>,
    current: Option<usize>,
) -> Line<'a> {
    let mut spans = vec![Span::styled(title, Style::default().fg(Color::DarkGray))];
    for (i, choice) in choices.enumerate() {
        let style = if current == Some(i) {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(choice, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
