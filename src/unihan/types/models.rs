//! Core data structures for Unihan character records.
//!
//! This module defines the values stored in the database:
//! - The per-character record and its sub-records
//! - Radical-stroke counts
//! - The region slots for IRG source identifiers

/// A single character record, keyed by Unicode code point.
///
/// Records are created lazily the first time any data file mentions the
/// code point. Every field other than `code_point` is optional in practice:
/// a character may appear in one data file and be absent from the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Character {
    /// Whether any line of input was dispatched for this code point.
    pub(crate) loaded: bool,

    /// The Unicode scalar value this record describes.
    pub code_point: u32,

    /// Total number of strokes (mainland value).
    pub strokes: u8,
    /// Mainland stroke count, the first listed value.
    pub strokes_mainland: u8,
    /// Taiwan stroke count, only when the source lists a second value.
    pub strokes_taiwan: Option<u8>,

    /// Tone-numbered pinyin, e.g. `jia4`.
    pub pinyin: Option<String>,
    /// Taiwan pronunciation, only when the source lists a second syllable.
    pub pinyin_taiwan: Option<String>,

    /// English gloss.
    pub definition: Option<String>,

    pub irg_sources: IrgSources,
    pub radical_stroke_counts: RadicalStrokeCounts,
}

impl Character {
    pub(crate) fn new(code_point: u32) -> Self {
        Self {
            code_point,
            ..Self::default()
        }
    }

    /// Returns `true` once any data line has been recorded for this character.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The code point as a `char`, if it is a valid Unicode scalar value.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.code_point)
    }
}

/// Source identifiers from the Ideographic Rapporteur Group, one per region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrgSources {
    /// PRC and Singapore
    pub g: Option<String>,
    /// Hong Kong
    pub h: Option<String>,
    /// Japan
    pub j: Option<String>,
    /// North Korea
    pub kp: Option<String>,
    /// South Korea
    pub k: Option<String>,
    /// Macao
    pub m: Option<String>,
    /// Taiwan
    pub t: Option<String>,
    /// Vietnam
    pub v: Option<String>,
}

/// The IRG regions that have a slot in [`IrgSources`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IrgRegion {
    G,
    H,
    J,
    Kp,
    K,
    M,
    T,
    V,
}

impl IrgSources {
    /// Returns the source identifier for `region`, if one was loaded.
    pub fn get(&self, region: IrgRegion) -> Option<&str> {
        self.slot(region).as_deref()
    }

    fn slot(&self, region: IrgRegion) -> &Option<String> {
        match region {
            IrgRegion::G => &self.g,
            IrgRegion::H => &self.h,
            IrgRegion::J => &self.j,
            IrgRegion::Kp => &self.kp,
            IrgRegion::K => &self.k,
            IrgRegion::M => &self.m,
            IrgRegion::T => &self.t,
            IrgRegion::V => &self.v,
        }
    }

    pub(crate) fn slot_mut(&mut self, region: IrgRegion) -> &mut Option<String> {
        match region {
            IrgRegion::G => &mut self.g,
            IrgRegion::H => &mut self.h,
            IrgRegion::J => &mut self.j,
            IrgRegion::Kp => &mut self.kp,
            IrgRegion::K => &mut self.k,
            IrgRegion::M => &mut self.m,
            IrgRegion::T => &mut self.t,
            IrgRegion::V => &mut self.v,
        }
    }
}

/// A radical-stroke classification, written `R.N` or `R'.N`.
///
/// The apostrophe marks a simplified form of the radical. The additional
/// stroke count can be negative in rare source records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadicalStrokeCount {
    /// KangXi radical number, 1–214.
    pub radical: u8,
    /// Whether the radical is in its simplified form.
    pub simplified: bool,
    /// Strokes beyond the radical.
    pub additional_strokes: i8,
}

/// The radical-stroke classifications of a character, per radical system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadicalStrokeCounts {
    /// From `kRSKangXi`.
    pub kangxi: Option<RadicalStrokeCount>,
    /// From `kRSUnicode`.
    pub unicode: Option<RadicalStrokeCount>,
}
