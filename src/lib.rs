//! # unihan-index
//!
//! An in-memory index of the Unicode Han database (Unihan), loaded straight
//! from the `Unihan.zip` archive published by the Unicode Consortium.
//!
//! Stroke counts, radical-stroke counts, IRG source identifiers, pinyin
//! (converted to tone numbers) and English definitions are kept per code
//! point. Once loaded, the database is read-only.
//!
//! ```no_run
//! use unihan_index::Database;
//!
//! let db = Database::initialise("Unihan.zip")?;
//! let ch = db.lookup(0x4E2D)?;
//! println!("{:?} {:?}", ch.pinyin, ch.definition);
//! # Ok::<(), unihan_index::UnihanError>(())
//! ```
pub mod unihan;

// Re-export the main types for convenience
pub use unihan::{
    codec,
    filters::{FieldDecoder, FilterRegistry},
    index::SENTINEL,
    types::models::{Character, IrgRegion, IrgSources, RadicalStrokeCount, RadicalStrokeCounts},
    Database, RecordError, Result, UnihanError,
};
