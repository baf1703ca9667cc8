//! Radical-stroke count notation.
//!
//! A radical-stroke count is written `R.N`, where `R` is the KangXi radical
//! number and `N` the number of strokes beyond the radical. An apostrophe
//! after the radical (`R'.N`) marks a simplified form of the radical; newer
//! Unihan releases also use a doubled apostrophe (`R''.N`) for non-Chinese
//! simplified forms, which is read the same way.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::unihan::types::error::RecordError;
use crate::unihan::types::models::RadicalStrokeCount;

/// KangXi radicals are numbered from 1 to 214.
const RADICALS: std::ops::RangeInclusive<u8> = 1..=214;

static RSC_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached radical-stroke regex pattern.
fn rsc_regex() -> &'static Regex {
    RSC_PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{1,3})('{0,2})\.(-?\d{1,3})$").expect("Invalid radical-stroke regex pattern")
    })
}

impl FromStr for RadicalStrokeCount {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RecordError::InvalidRadicalStroke { value: s.to_string() };

        let caps = rsc_regex().captures(s).ok_or_else(invalid)?;
        let radical: u8 = caps[1].parse().map_err(|_| invalid())?;
        if !RADICALS.contains(&radical) {
            return Err(invalid());
        }
        let additional_strokes: i8 = caps[3].parse().map_err(|_| invalid())?;

        Ok(Self {
            radical,
            simplified: !caps[2].is_empty(),
            additional_strokes,
        })
    }
}

impl fmt::Display for RadicalStrokeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.simplified {
            write!(f, "{}'.{}", self.radical, self.additional_strokes)
        } else {
            write!(f, "{}.{}", self.radical, self.additional_strokes)
        }
    }
}
