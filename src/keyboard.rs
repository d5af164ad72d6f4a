//! Keyboard model - which keys to light for a set of note spellings.
//!
//! Two octaves (4 and 5) of twelve keys. A key is active when the canonical
//! label of any active spelling matches its pitch class, so "Bb", "A#" and
//! "Cbb" all light the same key, in both octaves.

use crate::pitch::{canonical_pitch_class_label, first_enharmonic, PitchClass};

/// Octaves shown, lowest first.
pub const OCTAVES: [i32; 2] = [4, 5];

/// One physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardKey {
    pub pitch_class: PitchClass,
    pub octave: i32,
    /// The key's pitch class is among the active notes
    pub active: bool,
    /// The key's pitch class is the root
    pub root: bool,
}

impl KeyboardKey {
    pub fn label(&self) -> &'static str {
        self.pitch_class.label()
    }

    pub fn is_black(&self) -> bool {
        self.pitch_class.is_black_key()
    }

    /// Spelling to play when this key is pressed, e.g. "F#5".
    pub fn spelling(&self) -> String {
        format!("{}{}", self.label(), self.octave)
    }
}

#[derive(Debug, Clone)]
pub struct Keyboard {
    keys: Vec<KeyboardKey>,
}

impl Keyboard {
    /// Light the keys for `active_notes`, marking `root` if given.
    ///
    /// Enharmonic display pairs ("C#/Db") count as their first alternative.
    pub fn new<S: AsRef<str>>(active_notes: &[S], root: Option<&str>) -> Self {
        let active: Vec<&'static str> = active_notes
            .iter()
            .map(|n| canonical_pitch_class_label(first_enharmonic(n.as_ref())))
            .collect();
        let root = root.map(|r| canonical_pitch_class_label(first_enharmonic(r)));

        let keys = OCTAVES
            .iter()
            .flat_map(|&octave| PitchClass::all().map(move |pc| (octave, pc)))
            .map(|(octave, pitch_class)| KeyboardKey {
                pitch_class,
                octave,
                active: active.contains(&pitch_class.label()),
                root: root == Some(pitch_class.label()),
            })
            .collect();

        Self { keys }
    }

    /// All keys, left to right.
    pub fn keys(&self) -> &[KeyboardKey] {
        &self.keys
    }

    pub fn white_keys(&self) -> impl Iterator<Item = &KeyboardKey> {
        self.keys.iter().filter(|k| !k.is_black())
    }

    pub fn black_keys(&self) -> impl Iterator<Item = &KeyboardKey> {
        self.keys.iter().filter(|k| k.is_black())
    }

    pub fn active_keys(&self) -> impl Iterator<Item = &KeyboardKey> {
        self.keys.iter().filter(|k| k.active)
    }
}
