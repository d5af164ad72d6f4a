//! App state and input handling

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use tonal_keys::{
    io::CpalBackend,
    keyboard::Keyboard,
    playback::{PlaybackError, TonePlayer},
    theory::{ChordInfo, ChordLoop, LoopPlayback, Progression, ScaleData},
};

use super::ui;

/// Computer keys for the 24 piano keys, C4 upward: two rows laid out like a
/// piano (lower row plus the row above it for sharps).
pub const NOTE_KEYS: [char; 24] = [
    'z', 's', 'x', 'd', 'c', 'v', 'g', 'b', 'h', 'n', 'j', 'm', // octave 4
    'q', '2', 'w', '3', 'e', 'r', '5', 't', '6', 'y', '7', 'u', // octave 5
];

pub struct App {
    scale: ScaleData,
    player: TonePlayer<CpalBackend>,
    chord_loop: ChordLoop,
    playback: LoopPlayback,
    /// Suggested progression, reloadable into the loop with `p`
    progression: Option<Progression>,
    /// Index into `scale.chords`
    selected: usize,
    /// Last playback error, shown in the header
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(scale: ScaleData, player: TonePlayer<CpalBackend>, gap: Duration) -> Self {
        Self {
            scale,
            player,
            chord_loop: ChordLoop::new(),
            playback: LoopPlayback::with_gap(gap),
            progression: None,
            selected: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_loop(Instant::now());

            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep `progression` and put its chords in the loop.
    pub fn load_progression(&mut self, progression: Progression) {
        log::info!("progression: {}", progression.name);
        self.chord_loop = ChordLoop::from_progression(&progression);
        self.progression = Some(progression);
    }

    pub fn progression(&self) -> Option<&Progression> {
        self.progression.as_ref()
    }

    pub fn scale(&self) -> &ScaleData {
        &self.scale
    }

    pub fn chord_loop(&self) -> &ChordLoop {
        &self.chord_loop
    }

    pub fn playback(&self) -> &LoopPlayback {
        &self.playback
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn selected_chord(&self) -> Option<&ChordInfo> {
        self.scale.chords.get(self.selected)
    }

    /// Keyboard lit with the chord sounding in the loop, else the selected
    /// chord, else the scale.
    pub fn keyboard(&self) -> Keyboard {
        let root = Some(self.scale.root.as_str());
        match self.playback.current_chord().or(self.selected_chord()) {
            Some(chord) => Keyboard::new(&chord.notes, root),
            None => Keyboard::new(&self.scale.notes, root),
        }
    }

    fn poll_loop(&mut self, now: Instant) {
        let notes = self.playback.poll(now).map(|chord| chord.notes.clone());
        if let Some(notes) = notes {
            let result = self.player.play_tone_stack(&notes);
            self.report(result);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Down => {
                let last = self.scale.chords.len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Enter => {
                if let Some(notes) = self.selected_chord().map(|c| c.notes.clone()) {
                    let result = self.player.play_tone_stack(&notes);
                    self.report(result);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(chord) = self.selected_chord().cloned() {
                    if !self.chord_loop.push(chord) {
                        log::info!("loop is full");
                    }
                }
            }
            KeyCode::Char('-') => {
                self.chord_loop.pop();
            }
            KeyCode::Delete | KeyCode::Backspace => self.chord_loop.clear(),
            KeyCode::Char('p') => {
                if let Some(progression) = &self.progression {
                    self.chord_loop.replace_with(progression.chords.iter().cloned());
                }
            }
            KeyCode::Char(' ') => {
                if !self.playback.start(&self.chord_loop, Instant::now()) {
                    log::debug!("loop start ignored");
                }
            }
            KeyCode::Char(c) => self.play_key(c),
            _ => {}
        }
    }

    fn play_key(&mut self, c: char) {
        let Some(index) = NOTE_KEYS.iter().position(|&k| k == c.to_ascii_lowercase()) else {
            return;
        };
        let spelling = self.keyboard().keys()[index].spelling();
        let result = self.player.play_note(&spelling);
        self.report(result);
    }

    fn report(&mut self, result: Result<(), PlaybackError>) {
        match result {
            Ok(()) => self.status = None,
            Err(err) => {
                log::warn!("playback failed: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }
}
