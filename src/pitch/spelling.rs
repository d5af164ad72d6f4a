/*
Note Spelling Tokenizer
=======================

Note names reach us as free text from a text-generation service, so the
parser has to accept every spelling a musician might write and survive
everything else.

Grammar
-------

    spelling   := letter accidental? octave?
    letter     := [A-G]            (either case)
    accidental := "#" | "##" | "b" | "bb"
    octave     := "-"? digit+

Examples: C, c, F#, Bb4, C##, Dbb3, G-1, A0

The letter is matched case-insensitively and so is the accidental run: "EB"
tokenizes as letter E with an upper-case run "B". Only the four lower-case
runs above carry a delta, so an upper-case run leaves the letter natural.

Pitch Value
-----------

    pitch_value = base(letter) + delta(accidental) + (octave + 1) * 12

    base:  C=0  D=2  E=4  F=5  G=7  A=9  B=11
    delta: none=0  #=+1  ##=+2  b=-1  bb=-2

With the default octave of 4, "C" is 60 and "A" is 69 (the MIDI numbering).

Anything that does not match the grammar tokenizes to the Defaulted variant,
which resolves to C4. That fallback is a visible branch here rather than a
hidden failure, so callers can tell the two apart when they care.
*/

use std::fmt;

/// Octave assumed when a spelling carries none.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Pitch value a spelling falls back to when it cannot be tokenized (C4).
pub const FALLBACK_PITCH_VALUE: i32 = 60;

/// One of the seven natural letter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Case-insensitive lookup.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Semitones above C.
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

/// Accidental run following the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    DoubleSharp,
    Flat,
    DoubleFlat,
}

impl Accidental {
    /// Semitone shift applied to the letter.
    pub fn delta(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
            Accidental::Flat => -1,
            Accidental::DoubleFlat => -2,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
        }
    }
}

/// A successfully tokenized note name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteSpelling {
    pub letter: Letter,
    pub accidental: Accidental,
    /// Octave as written; `None` means the spelling omitted it.
    pub octave: Option<i32>,
}

impl NoteSpelling {
    /// Octave used for pitch computation (written octave or 4).
    pub fn octave(&self) -> i32 {
        self.octave.unwrap_or(DEFAULT_OCTAVE)
    }

    /// Absolute semitone index, C4 = 60.
    ///
    /// A hand-built spelling whose octave puts the value outside `i32`
    /// resolves to C4, like any other spelling that cannot be placed.
    pub fn pitch_value(&self) -> i32 {
        self.checked_pitch_value().unwrap_or(FALLBACK_PITCH_VALUE)
    }

    /// Absolute semitone index, or `None` if it does not fit an `i32`.
    pub fn checked_pitch_value(&self) -> Option<i32> {
        self.octave()
            .checked_add(1)?
            .checked_mul(12)?
            .checked_add(self.letter.semitone() + self.accidental.delta())
    }

    /// Parse a spelling, reporting why it does not match the grammar.
    pub fn parse_strict(spelling: &str) -> Result<Self, SpellingError> {
        tokenize(spelling)
    }
}

impl fmt::Display for NoteSpelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.letter, self.accidental.symbol())?;
        if let Some(octave) = self.octave {
            write!(f, "{}", octave)?;
        }
        Ok(())
    }
}

/// Tagged result of the lenient tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedSpelling {
    /// The text matched the grammar.
    Parsed(NoteSpelling),
    /// The text did not match; it stands in for C4.
    Defaulted,
}

impl ParsedSpelling {
    /// Tokenize without failing. Unmatched input becomes `Defaulted`.
    pub fn parse(spelling: &str) -> Self {
        match tokenize(spelling) {
            Ok(note) => ParsedSpelling::Parsed(note),
            Err(err) => {
                log::debug!("note spelling {:?} defaulted to C4: {}", spelling, err);
                ParsedSpelling::Defaulted
            }
        }
    }

    pub fn pitch_value(&self) -> i32 {
        match self {
            ParsedSpelling::Parsed(note) => note.pitch_value(),
            ParsedSpelling::Defaulted => FALLBACK_PITCH_VALUE,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, ParsedSpelling::Defaulted)
    }
}

/// Why a spelling failed to tokenize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellingError {
    /// Nothing to parse
    Empty,
    /// First character is not A-G
    UnknownLetter(char),
    /// Characters left over after letter, accidental and octave
    TrailingInput(String),
    /// Octave digits do not fit an i32
    OctaveOutOfRange(String),
}

impl fmt::Display for SpellingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellingError::Empty => write!(f, "empty note spelling"),
            SpellingError::UnknownLetter(c) => {
                write!(f, "unknown note letter '{}' (expected A-G)", c)
            }
            SpellingError::TrailingInput(rest) => {
                write!(f, "unexpected trailing input {:?}", rest)
            }
            SpellingError::OctaveOutOfRange(digits) => {
                write!(f, "octave {} is out of range", digits)
            }
        }
    }
}

impl std::error::Error for SpellingError {}

fn tokenize(spelling: &str) -> Result<NoteSpelling, SpellingError> {
    let mut chars = spelling.char_indices().peekable();

    let (_, first) = chars.next().ok_or(SpellingError::Empty)?;
    let letter = Letter::from_char(first).ok_or(SpellingError::UnknownLetter(first))?;

    // Accidental run: up to two of the same family ('#', or 'b' in either case).
    let mut run = String::new();
    while let Some(&(_, c)) = chars.peek() {
        let same_family = match run.chars().next() {
            None => c == '#' || c.eq_ignore_ascii_case(&'b'),
            Some('#') => c == '#',
            Some(_) => c.eq_ignore_ascii_case(&'b'),
        };
        if !same_family || run.len() == 2 {
            break;
        }
        run.push(c);
        chars.next();
    }
    let accidental = match run.as_str() {
        "#" => Accidental::Sharp,
        "##" => Accidental::DoubleSharp,
        "b" => Accidental::Flat,
        "bb" => Accidental::DoubleFlat,
        _ => Accidental::Natural,
    };

    let rest = match chars.peek() {
        Some(&(idx, _)) => &spelling[idx..],
        None => "",
    };
    let octave = parse_octave(rest)?;

    let note = NoteSpelling {
        letter,
        accidental,
        octave,
    };
    if note.checked_pitch_value().is_none() {
        return Err(SpellingError::OctaveOutOfRange(rest.to_string()));
    }
    Ok(note)
}

fn parse_octave(rest: &str) -> Result<Option<i32>, SpellingError> {
    if rest.is_empty() {
        return Ok(None);
    }

    let digits = rest.strip_prefix('-').unwrap_or(rest);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SpellingError::TrailingInput(rest.to_string()));
    }

    rest.parse::<i32>()
        .map(Some)
        .map_err(|_| SpellingError::OctaveOutOfRange(rest.to_string()))
}
