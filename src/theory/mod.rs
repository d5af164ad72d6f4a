//! # Scale and chord payloads
//!
//! Scales, their diatonic chords and suggested progressions come from an
//! external text-generation service as JSON. The types here mirror that
//! document shape field for field (camelCase names, `type` for the chord
//! quality) and are otherwise opaque: the playback side only reads the
//! `notes` lists, and every spelling in them is untrusted free text that goes
//! through [`crate::pitch`] with its C4 fallback.
//!
//! ## Key Types
//! - [`ScaleData`] - a scale, its notes and its chords
//! - [`ChordInfo`] - one chord card (roman numeral, name, notes, quality)
//! - [`Progression`] - a named chord sequence
//! - [`ChordLoop`] / [`LoopPlayback`] - user-assembled loop and its timed playback
//! - [`ScaleType`] - the scale kinds on offer

mod chord_loop;
mod scale_type;

pub use chord_loop::{ChordLoop, LoopPlayback, LOOP_CAPACITY, LOOP_GAP};
pub use scale_type::{root_choice_index, ScaleType, ROOT_CHOICES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pitch::{canonical_pitch_class_label, first_enharmonic};

/// One chord of a scale or progression.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordInfo {
    /// Roman-numeral degree, e.g. "ii" or "vii°"
    pub roman: String,
    /// Chord name, e.g. "D Minor"
    pub name: String,
    /// Note spellings, lowest first
    pub notes: Vec<String>,
    /// Quality label, e.g. "Minor" (`type` on the wire)
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub quality: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
}

impl ChordInfo {
    pub fn new(roman: &str, name: &str, notes: &[&str], quality: &str) -> Self {
        Self {
            roman: roman.to_string(),
            name: name.to_string(),
            notes: notes.iter().map(|n| n.to_string()).collect(),
            quality: quality.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Text shown under the chord name: the description, else the quality.
    pub fn caption(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.quality)
    }

    /// Canonical pitch-class labels of the chord's notes, in order.
    pub fn pitch_class_labels(&self) -> Vec<&'static str> {
        self.notes
            .iter()
            .map(|n| canonical_pitch_class_label(first_enharmonic(n)))
            .collect()
    }
}

/// A scale as returned by the external service.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleData {
    /// e.g. "C Major"
    pub scale_name: String,
    pub root: String,
    /// Scale kind label (`type` on the wire), e.g. "Natural Minor"
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub scale_type: String,
    pub notes: Vec<String>,
    pub description: String,
    pub chords: Vec<ChordInfo>,
}

impl ScaleData {
    /// C major with its seven diatonic triads; shown before any fetch.
    pub fn c_major() -> Self {
        Self {
            scale_name: "C Major".to_string(),
            root: "C".to_string(),
            scale_type: ScaleType::Major.label().to_string(),
            notes: ["C", "D", "E", "F", "G", "A", "B"]
                .iter()
                .map(|n| n.to_string())
                .collect(),
            description: "The standard major scale, consisting of natural notes. \
                          It sounds happy, resolved, and simple."
                .to_string(),
            chords: vec![
                ChordInfo::new("I", "C Major", &["C", "E", "G"], "Major"),
                ChordInfo::new("ii", "D Minor", &["D", "F", "A"], "Minor"),
                ChordInfo::new("iii", "E Minor", &["E", "G", "B"], "Minor"),
                ChordInfo::new("IV", "F Major", &["F", "A", "C"], "Major"),
                ChordInfo::new("V", "G Major", &["G", "B", "D"], "Major"),
                ChordInfo::new("vi", "A Minor", &["A", "C", "E"], "Minor"),
                ChordInfo::new("vii°", "B Diminished", &["B", "D", "F"], "Diminished"),
            ],
        }
    }

    /// The scale kind, if the payload's label is one we know.
    pub fn kind(&self) -> Option<ScaleType> {
        ScaleType::from_label(&self.scale_type)
    }
}

impl Default for ScaleData {
    fn default() -> Self {
        Self::c_major()
    }
}

/// A named chord sequence suggested for a scale.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    pub name: String,
    pub chords: Vec<ChordInfo>,
    pub description: String,
}

/// Parse a scale document from the external service.
#[cfg(feature = "serde")]
pub fn parse_scale_payload(json: &str) -> Result<ScaleData, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse a progression document from the external service.
#[cfg(feature = "serde")]
pub fn parse_progression_payload(json: &str) -> Result<Progression, serde_json::Error> {
    serde_json::from_str(json)
}
