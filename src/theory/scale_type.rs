#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pitch::{canonical_pitch_class_label, first_enharmonic, ParsedSpelling};

/// Root choices offered to the user, with enharmonic pairs spelled out.
///
/// Pass these through [`crate::pitch::first_enharmonic`] before sounding or
/// resolving them.
pub const ROOT_CHOICES: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

/// Position in [`ROOT_CHOICES`] of the choice sharing `root`'s pitch class.
///
/// `None` when `root` is not a note spelling at all (it would otherwise read
/// as C).
pub fn root_choice_index(root: &str) -> Option<usize> {
    let root = first_enharmonic(root);
    if ParsedSpelling::parse(root).is_defaulted() {
        return None;
    }
    let label = canonical_pitch_class_label(root);
    ROOT_CHOICES
        .iter()
        .position(|choice| canonical_pitch_class_label(first_enharmonic(choice)) == label)
}

/// Scale kinds the external service is asked about.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleType {
    Major,
    #[cfg_attr(feature = "serde", serde(rename = "Natural Minor"))]
    Minor,
    #[cfg_attr(feature = "serde", serde(rename = "Harmonic Minor"))]
    HarmonicMinor,
    #[cfg_attr(feature = "serde", serde(rename = "Melodic Minor"))]
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    #[cfg_attr(feature = "serde", serde(rename = "Pentatonic Major"))]
    PentatonicMajor,
    #[cfg_attr(feature = "serde", serde(rename = "Pentatonic Minor"))]
    PentatonicMinor,
    Blues,
    #[cfg_attr(feature = "serde", serde(rename = "Whole Tone"))]
    WholeTone,
    Diminished,
}

impl ScaleType {
    /// Every scale kind.
    pub const ALL: [ScaleType; 14] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
        ScaleType::PentatonicMajor,
        ScaleType::PentatonicMinor,
        ScaleType::Blues,
        ScaleType::WholeTone,
        ScaleType::Diminished,
    ];

    /// The kinds offered in the scale picker (whole tone and diminished are
    /// known but not offered).
    pub const SELECTABLE: [ScaleType; 12] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
        ScaleType::PentatonicMajor,
        ScaleType::PentatonicMinor,
        ScaleType::Blues,
    ];

    /// Display label, also the wire name.
    pub fn label(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Minor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Locrian => "Locrian",
            ScaleType::PentatonicMajor => "Pentatonic Major",
            ScaleType::PentatonicMinor => "Pentatonic Minor",
            ScaleType::Blues => "Blues",
            ScaleType::WholeTone => "Whole Tone",
            ScaleType::Diminished => "Diminished",
        }
    }

    /// Position in the picker, if this kind is offered there.
    pub fn picker_index(self) -> Option<usize> {
        Self::SELECTABLE.iter().position(|&t| t == self)
    }

    /// Case-insensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for ScaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
