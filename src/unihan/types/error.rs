//! Custom error types for the unihan-index crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum UnihanError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The zip container is structurally invalid or uses a feature this reader does not handle.
    #[error("Invalid archive: {0}")]
    InvalidArchive(String),

    /// A member's CRC-32 did not match the value recorded in the central directory.
    #[error("Checksum mismatch for {name}: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch {
        name: String,
        expected: u32,
        actual: u32,
    },

    /// A line of a data file could not be parsed or was rejected by a field decoder.
    #[error("{file}:{line}: {source}")]
    Format {
        file: String,
        line: usize,
        #[source]
        source: RecordError,
    },

    /// The requested code point is not present in the database.
    #[error("No such character: U+{0:04X}")]
    NotFound(u32),
}

/// Errors raised while parsing a single record line.
///
/// These carry no file context; the loader wraps them in
/// [`UnihanError::Format`] together with the file name and line number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The line does not start with `U+<hex><TAB>`.
    #[error("expected a U+<hex> code point followed by a tab")]
    MissingCodePoint,

    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    /// The record has fewer fields than its tag requires.
    #[error("got invalid record {fields:?}")]
    Malformed { fields: Vec<String> },

    /// A numeric subfield could not be parsed.
    #[error("invalid number '{value}'")]
    InvalidNumber { value: String },

    /// A radical-stroke value in neither `R.N` nor `R'.N` notation.
    #[error("invalid radical-stroke count '{value}'")]
    InvalidRadicalStroke { value: String },

    /// A romanized syllable contains a character the tone decoder does not know.
    #[error("invalid character {character:?} in pinyin '{syllable}'")]
    InvalidCharacter { character: char, syllable: String },
}

/// A convenience `Result` type alias using the crate's `UnihanError` type.
pub type Result<T> = std::result::Result<T, UnihanError>;
