//! Codec layer for individual field values.
//!
//! # Submodules
//!
//! - [`tone`][]: Pinyin tone-mark to tone-number conversion
//! - [`radical`][]: Radical-stroke count notation (`R.N`, `R'.N`)

pub mod radical;
pub mod tone;
