/// Sharp-preferring display label for each pitch class, indexed from C.
pub const PITCH_CLASS_LABELS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the twelve equal-tempered tones within an octave.
///
/// Always in `0..12`, whatever octave or spelling it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Fold an absolute pitch value onto the octave. Negative values wrap
    /// upward, so -1 is B.
    pub fn from_pitch_value(pitch_value: i32) -> Self {
        PitchClass(pitch_value.rem_euclid(12) as u8)
    }

    /// Semitones above C.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Canonical label from [`PITCH_CLASS_LABELS`].
    pub fn label(self) -> &'static str {
        PITCH_CLASS_LABELS[self.0 as usize]
    }

    /// True for the five classes sitting on black piano keys.
    pub fn is_black_key(self) -> bool {
        matches!(self.0, 1 | 3 | 6 | 8 | 10)
    }

    /// All twelve classes in ascending order from C.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_octaves() {
        assert_eq!(PitchClass::from_pitch_value(60), PitchClass::C);
        assert_eq!(PitchClass::from_pitch_value(72), PitchClass::C);
        assert_eq!(PitchClass::from_pitch_value(69).label(), "A");
    }

    #[test]
    fn negative_values_wrap_into_range() {
        assert_eq!(PitchClass::from_pitch_value(-1).label(), "B");
        assert_eq!(PitchClass::from_pitch_value(-12), PitchClass::C);
        assert_eq!(PitchClass::from_pitch_value(-3).label(), "A");
    }

    #[test]
    fn black_keys() {
        let black: Vec<&str> = PitchClass::all()
            .filter(|pc| pc.is_black_key())
            .map(|pc| pc.label())
            .collect();
        assert_eq!(black, vec!["C#", "D#", "F#", "G#", "A#"]);
    }
}
