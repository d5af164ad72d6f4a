//! Keyboard widget - two octaves with lit chord/scale tones

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tonal_keys::keyboard::{Keyboard, KeyboardKey};

use crate::app::NOTE_KEYS;

/// Columns per white key
const KEY_WIDTH: usize = 4;

fn key_style(key: &KeyboardKey) -> Style {
    let base = if key.is_black() {
        Style::default().fg(Color::White).bg(Color::Black)
    } else {
        Style::default().fg(Color::Black).bg(Color::Gray)
    };
    if key.root {
        base.bg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else if key.active {
        base.bg(Color::Green)
    } else {
        base
    }
}

/// Render the keyboard: black keys straddle the gap after their white key.
pub fn render_keyboard(frame: &mut Frame, area: Rect, keyboard: &Keyboard) {
    let block = Block::default().title(" Keyboard ").borders(Borders::ALL);

    let keys = keyboard.keys();
    let pad = " ".repeat(KEY_WIDTH / 2);
    let blank = " ".repeat(KEY_WIDTH);

    let mut black_labels = vec![Span::raw(pad.clone())];
    let mut black_bindings = vec![Span::raw(pad)];
    let mut white_labels = Vec::new();
    let mut white_bindings = Vec::new();

    for (i, key) in keys.iter().enumerate() {
        if key.is_black() {
            continue;
        }
        white_labels.push(Span::styled(
            format!("{:^width$}", key.label(), width = KEY_WIDTH),
            key_style(key),
        ));
        white_bindings.push(Span::styled(
            format!("{:^width$}", NOTE_KEYS[i], width = KEY_WIDTH),
            Style::default().fg(Color::DarkGray),
        ));

        match keys.get(i + 1).filter(|next| next.is_black()) {
            Some(next) => {
                black_labels.push(Span::styled(
                    format!("{:^width$}", next.label(), width = KEY_WIDTH),
                    key_style(next),
                ));
                black_bindings.push(Span::styled(
                    format!("{:^width$}", NOTE_KEYS[i + 1], width = KEY_WIDTH),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            None => {
                black_labels.push(Span::raw(blank.clone()));
                black_bindings.push(Span::raw(blank.clone()));
            }
        }
    }

    let lines = vec![
        Line::from(black_labels),
        Line::from(black_bindings),
        Line::from(white_labels),
        Line::from(white_bindings),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
