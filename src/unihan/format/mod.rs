//! File format parsing layer for the Unihan archive.
//!
//! This module bridges between raw archive bytes and the
//! [`Database`](crate::unihan::database::Database) loader.
//!
//! # Module Organization
//!
//! - [`archive`]: Locates and decompresses members of the zip container
//! - [`record`]: Splits member contents into lines and parses record lines
//!
//! # Architecture
//!
//! ```text
//! Unihan.zip
//! ┌──────────────────────────┐
//! │ Unihan_Readings.txt      │ ← archive::ZipArchive::read_by_name()
//! │ Unihan_IRGSources.txt    │
//! │ ...                      │
//! └──────────────────────────┘
//!            │
//!            ▼
//!   U+4E00<TAB>kDefinition<TAB>one   ← record::parse_line()
//! ```

pub mod archive;
pub mod record;
