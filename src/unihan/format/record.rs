//! Line-level parsing of Unihan data files.
//!
//! Every non-comment line has the form
//! `U+<hex code point><TAB><tag><TAB><value>[<TAB><value>...]`.

use crate::unihan::types::error::RecordError;

/// Lines shorter than this, newline included, carry no record.
const MIN_RECORD_LEN: usize = 7;

/// A parsed record line: the code point and the fields that follow it.
///
/// `fields[0]` is the tag (e.g. `kDefinition`), the rest are values.
#[derive(Debug, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub code_point: u32,
    pub fields: Vec<&'a str>,
}

/// Splits a member's contents into `(1-based line number, line)` pairs.
///
/// Each line keeps its trailing newline. A final line without one is
/// yielded like any other.
pub fn lines(data: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    data.split_inclusive(|&b| b == b'\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line))
}

/// Parses one line of a data file.
///
/// Returns `Ok(None)` for comments, blank lines and anything too short to
/// hold a record.
///
/// # Errors
/// - [`RecordError::InvalidUtf8`] if the line is not UTF-8
/// - [`RecordError::MissingCodePoint`] if it does not start with `U+<hex><TAB>`
pub fn parse_line(line: &[u8]) -> Result<Option<RawRecord<'_>>, RecordError> {
    if line.len() < MIN_RECORD_LEN || line.starts_with(b"#") {
        return Ok(None);
    }

    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    let line = std::str::from_utf8(line).map_err(|_| RecordError::InvalidUtf8)?;
    let (code_point, rest) = parse_code_point(line).ok_or(RecordError::MissingCodePoint)?;

    Ok(Some(RawRecord {
        code_point,
        fields: rest.split('\t').collect(),
    }))
}

/// Parses the leading `U+<hex><TAB>` and returns the code point and the remainder.
fn parse_code_point(line: &str) -> Option<(u32, &str)> {
    let (code, rest) = line.strip_prefix("U+")?.split_once('\t')?;
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let code_point = u32::from_str_radix(code, 16).ok()?;
    Some((code_point, rest))
}
