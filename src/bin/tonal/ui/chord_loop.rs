//! Chord loop panel - queued chords and the one sounding

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tonal_keys::theory::{ChordLoop, LoopPlayback, LOOP_CAPACITY};

pub fn render_chord_loop(
    frame: &mut Frame,
    area: Rect,
    chord_loop: &ChordLoop,
    playback: &LoopPlayback,
    progression: Option<&str>,
) {
    let play_symbol = if playback.is_playing() { "▶" } else { "⏸" };
    let mut block = Block::default()
        .title(format!(
            " Loop {} {}/{} ",
            play_symbol,
            chord_loop.len(),
            LOOP_CAPACITY
        ))
        .borders(Borders::ALL);
    if let Some(name) = progression {
        block = block.title_bottom(format!(" {} ", name));
    }

    let lines: Vec<Line> = if chord_loop.is_empty() {
        vec![Line::from(Span::styled(
            "press + to add the selected chord",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        chord_loop
            .iter()
            .enumerate()
            .map(|(i, chord)| {
                let sounding = playback.current() == Some(i);
                let style = if sounding {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{:<5}", chord.roman), style),
                    Span::styled(chord.name.clone(), style),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
