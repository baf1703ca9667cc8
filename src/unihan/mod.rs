//! Core Unihan database module

pub mod codec;
pub mod database;
pub mod filters;
pub mod format;
pub mod index;
pub mod types;
mod utils;

pub use database::Database;
pub use types::error::{RecordError, Result, UnihanError};
