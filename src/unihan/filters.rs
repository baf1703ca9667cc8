//! Field decoders and the registry that maps data files to them.
//!
//! Each Unihan data file holds records for many different fields. A
//! [`FieldDecoder`] knows how to apply a handful of those fields to a
//! [`Character`], and ignores every other tag, so several decoders can
//! safely process the same file. The [`FilterRegistry`] lists which decoder
//! runs over which file, in order.

use log::warn;

use crate::unihan::codec::tone::decode_tone;
use crate::unihan::types::error::RecordError;
use crate::unihan::types::models::{Character, IrgRegion, RadicalStrokeCount};

pub const READINGS_FILE: &str = "Unihan_Readings.txt";
pub const IRG_SOURCES_FILE: &str = "Unihan_IRGSources.txt";
pub const RADICAL_STROKE_COUNTS_FILE: &str = "Unihan_RadicalStrokeCounts.txt";
pub const DICTIONARY_LIKE_DATA_FILE: &str = "Unihan_DictionaryLikeData.txt";

/// The record tags this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    IrgSource(IrgRegion),
    Definition,
    Mandarin,
    RsKangXi,
    RsUnicode,
    TotalStrokes,
    /// Any tag without a decoder.
    Other,
}

impl Tag {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "kIRG_GSource" => Tag::IrgSource(IrgRegion::G),
            "kIRG_HSource" => Tag::IrgSource(IrgRegion::H),
            "kIRG_JSource" => Tag::IrgSource(IrgRegion::J),
            "kIRG_KPSource" => Tag::IrgSource(IrgRegion::Kp),
            "kIRG_KSource" => Tag::IrgSource(IrgRegion::K),
            "kIRG_MSource" => Tag::IrgSource(IrgRegion::M),
            "kIRG_TSource" => Tag::IrgSource(IrgRegion::T),
            "kIRG_VSource" => Tag::IrgSource(IrgRegion::V),
            "kDefinition" => Tag::Definition,
            "kMandarin" => Tag::Mandarin,
            "kRSKangXi" => Tag::RsKangXi,
            "kRSUnicode" => Tag::RsUnicode,
            "kTotalStrokes" => Tag::TotalStrokes,
            _ => Tag::Other,
        }
    }
}

/// A decoder for one family of record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDecoder {
    /// `kIRG_*Source`: regional source identifiers, stored verbatim.
    IrgSource,
    /// `kDefinition`: the English gloss. A repeated definition overwrites the earlier one.
    Definition,
    /// `kMandarin`: mainland and optional Taiwan pinyin, converted to tone numbers.
    Pronunciation,
    /// `kRSKangXi`, `kRSUnicode`: radical-stroke counts.
    RadicalStroke,
    /// `kTotalStrokes`: mainland and optional Taiwan stroke counts.
    TotalStrokes,
}

impl FieldDecoder {
    /// Applies a record's fields to `record`.
    ///
    /// `fields[0]` is the tag; tags this decoder does not handle leave the
    /// record untouched.
    ///
    /// # Errors
    /// Any record with fewer than two fields is malformed, whatever its
    /// tag. Numeric and radical-stroke values that fail to parse are
    /// rejected as well. Pronunciations that fail to decode are only
    /// logged.
    pub fn decode(self, record: &mut Character, code_point: u32, fields: &[&str]) -> Result<(), RecordError> {
        if fields.len() < 2 {
            return Err(RecordError::Malformed {
                fields: fields.iter().map(|f| f.to_string()).collect(),
            });
        }
        let value = fields[1];

        match (self, Tag::parse(fields[0])) {
            (FieldDecoder::IrgSource, Tag::IrgSource(region)) => {
                *record.irg_sources.slot_mut(region) = Some(value.to_string());
            }
            (FieldDecoder::Definition, Tag::Definition) => {
                record.definition = Some(value.to_string());
            }
            (FieldDecoder::Pronunciation, Tag::Mandarin) => {
                decode_pronunciation(record, code_point, value);
            }
            (FieldDecoder::RadicalStroke, Tag::RsKangXi) => {
                record.radical_stroke_counts.kangxi = Some(parse_radical_stroke(value)?);
            }
            (FieldDecoder::RadicalStroke, Tag::RsUnicode) => {
                record.radical_stroke_counts.unicode = Some(parse_radical_stroke(value)?);
            }
            (FieldDecoder::TotalStrokes, Tag::TotalStrokes) => {
                decode_total_strokes(record, value)?;
            }
            _ => {}
        }

        Ok(())
    }
}

fn decode_pronunciation(record: &mut Character, code_point: u32, value: &str) {
    let mut syllables = value.split_whitespace();

    record.pinyin = syllables.next().and_then(|s| decode_or_warn(code_point, s));
    record.pinyin_taiwan = syllables.next().and_then(|s| decode_or_warn(code_point, s));
}

fn decode_or_warn(code_point: u32, syllable: &str) -> Option<String> {
    match decode_tone(syllable) {
        Ok(pinyin) => Some(pinyin),
        Err(e) => {
            warn!("Odd tone for U+{:04X} ({}): {}", code_point, display_char(code_point), e);
            None
        }
    }
}

fn display_char(code_point: u32) -> char {
    char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Parses the first radical-stroke count of a (possibly space-separated) value.
fn parse_radical_stroke(value: &str) -> Result<RadicalStrokeCount, RecordError> {
    value.split_whitespace().next().unwrap_or(value).parse()
}

fn decode_total_strokes(record: &mut Character, value: &str) -> Result<(), RecordError> {
    let mut counts = value.split_whitespace().map(|s| {
        s.parse::<u8>()
            .map_err(|_| RecordError::InvalidNumber { value: s.to_string() })
    });

    let mainland = counts
        .next()
        .ok_or_else(|| RecordError::InvalidNumber { value: value.to_string() })??;
    let taiwan = counts.next().transpose()?;

    record.strokes = mainland;
    record.strokes_mainland = mainland;
    record.strokes_taiwan = taiwan;
    Ok(())
}

/// Associates a data file with the decoder that processes its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub filename: String,
    pub decoder: FieldDecoder,
}

/// An ordered list of file filters.
///
/// The loader runs the filters in registration order, so decoders for the
/// same file see each record in that order too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRegistry {
    filters: Vec<FileFilter>,
}

impl FilterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Appends a filter running `decoder` over the file named `filename`.
    pub fn register(&mut self, filename: impl Into<String>, decoder: FieldDecoder) -> &mut Self {
        self.filters.push(FileFilter {
            filename: filename.into(),
            decoder,
        });
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileFilter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterRegistry {
    /// The filters for a stock Unihan.zip.
    ///
    /// `kRSUnicode` and `kTotalStrokes` live in `Unihan_IRGSources.txt` in
    /// recent releases, so those decoders are registered for it as well.
    fn default() -> Self {
        let mut registry = Self::new();
        registry
            .register(IRG_SOURCES_FILE, FieldDecoder::IrgSource)
            .register(READINGS_FILE, FieldDecoder::Pronunciation)
            .register(READINGS_FILE, FieldDecoder::Definition)
            .register(RADICAL_STROKE_COUNTS_FILE, FieldDecoder::RadicalStroke)
            .register(IRG_SOURCES_FILE, FieldDecoder::RadicalStroke)
            .register(DICTIONARY_LIKE_DATA_FILE, FieldDecoder::TotalStrokes)
            .register(IRG_SOURCES_FILE, FieldDecoder::TotalStrokes);
        registry
    }
}

impl<'a> IntoIterator for &'a FilterRegistry {
    type Item = &'a FileFilter;
    type IntoIter = std::slice::Iter<'a, FileFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
