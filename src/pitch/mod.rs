//! Note-name resolution.
//!
//! Turns free-text note spellings ("F##", "Bb3", "c") into absolute pitch
//! values, canonical pitch-class labels and equal-tempered frequencies.
//! Nothing here fails: a spelling that does not match the grammar resolves to
//! C4 (see [`ParsedSpelling::Defaulted`]). Use [`NoteSpelling::parse_strict`]
//! when the difference matters.

/// Twelve-tone pitch classes and their display labels.
pub mod class;
/// Tokenizer for letter/accidental/octave spellings.
pub mod spelling;

pub use class::{PitchClass, PITCH_CLASS_LABELS};
pub use spelling::{
    Accidental, Letter, NoteSpelling, ParsedSpelling, SpellingError, DEFAULT_OCTAVE,
    FALLBACK_PITCH_VALUE,
};

/// Pitch value of A4, the tuning reference.
pub const A4_PITCH_VALUE: i32 = 69;
/// Frequency of A4 in Hz.
pub const A4_FREQUENCY: f64 = 440.0;

/// Absolute semitone index of a spelling, C4 = 60.
///
/// Unparseable input yields 60 (C4) rather than an error.
pub fn resolve_pitch_value(spelling: &str) -> i32 {
    ParsedSpelling::parse(spelling).pitch_value()
}

/// Canonical sharp-preferring label of a spelling's pitch class.
///
/// Every enharmonic spelling of a class yields the same label, so "Bb",
/// "A#" and "Cbb" all light the same key.
pub fn canonical_pitch_class_label(spelling: &str) -> &'static str {
    PitchClass::from_pitch_value(resolve_pitch_value(spelling)).label()
}

/// Equal-tempered frequency in Hz for a pitch value, A4 = 440 Hz.
pub fn pitch_value_to_freq(pitch_value: i32) -> f64 {
    A4_FREQUENCY * 2.0_f64.powf((pitch_value - A4_PITCH_VALUE) as f64 / 12.0)
}

/// Frequency in Hz of a spelling.
pub fn frequency_of(spelling: &str) -> f64 {
    pitch_value_to_freq(resolve_pitch_value(spelling))
}

/// First alternative of an enharmonic display pair: "C#/Db" -> "C#".
///
/// The parser does not split pairs itself; callers holding display strings
/// pass them through here first.
pub fn first_enharmonic(spelling: &str) -> &str {
    spelling.split('/').next().unwrap_or(spelling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enharmonic_spellings_share_a_label() {
        assert_eq!(canonical_pitch_class_label("A#"), canonical_pitch_class_label("Bb"));
        assert_eq!(canonical_pitch_class_label("Bb"), "A#");
        assert_eq!(canonical_pitch_class_label("E#"), "F");
        assert_eq!(canonical_pitch_class_label("Fb"), "E");
        assert_eq!(canonical_pitch_class_label("B#"), "C");
        assert_eq!(canonical_pitch_class_label("Cb"), "B");
        assert_eq!(canonical_pitch_class_label("F##"), "G");
    }

    #[test]
    fn double_accidentals_fold() {
        assert_eq!(canonical_pitch_class_label("C##"), "D");
        assert_eq!(canonical_pitch_class_label("Dbb"), "C");
    }

    #[test]
    fn octave_defaults_to_four() {
        assert_eq!(resolve_pitch_value("C"), resolve_pitch_value("C4"));
        assert_eq!(resolve_pitch_value("g#"), resolve_pitch_value("G#4"));
    }

    #[test]
    fn label_ignores_octave() {
        assert_eq!(canonical_pitch_class_label("Eb2"), canonical_pitch_class_label("D#7"));
        assert_eq!(canonical_pitch_class_label("Cb-1"), "B");
    }

    #[test]
    fn malformed_spellings_resolve_to_c4() {
        for bad in ["H", "Z#", "", "C#/Db", "do", " C"] {
            assert_eq!(resolve_pitch_value(bad), 60, "{bad:?}");
            assert_eq!(canonical_pitch_class_label(bad), "C", "{bad:?}");
        }
    }

    #[test]
    fn frequencies() {
        assert_eq!(frequency_of("A4"), 440.0);
        assert_eq!(frequency_of("A5"), 880.0);
        assert_eq!(frequency_of("A3"), 220.0);
        assert!((frequency_of("C4") - 261.63).abs() < 1e-2);
        assert!((frequency_of("C") - 261.63).abs() < 1e-2);
    }

    #[test]
    fn splits_enharmonic_pairs() {
        assert_eq!(first_enharmonic("C#/Db"), "C#");
        assert_eq!(first_enharmonic("E"), "E");
        assert_eq!(first_enharmonic("/Db"), "");
        assert_eq!(canonical_pitch_class_label(first_enharmonic("A#/Bb")), "A#");
    }
}
