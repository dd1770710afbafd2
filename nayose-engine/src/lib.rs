//! Normalization toolkit for Japanese lookup keys.
//!
//! Collapses equivalent spellings of a name (hiragana/katakana, half/full
//! width, variant kanji, embedded spaces) onto one canonical key, and adds
//! kansuji conversion and n-gram tokens for search indexes.

pub mod config;
pub mod hash;
pub mod kana;
pub mod kansuji;
pub mod logging;
pub mod ngram;
pub mod normalize;
pub mod trim;
pub mod variant;
pub mod width;

pub use config::Settings;
pub use hash::hash;
pub use kana::{
    hiragana_to_katakana, merge_katakana, to_zenkaku_katakana, to_zenkaku_katakana_char,
};
pub use kansuji::{KansujiError, convert_kansuji, kanji_digit, parse_kansuji, to_kanji};
pub use ngram::to_ngram;
pub use normalize::{Normalizer, normalize};
pub use trim::{full_trim, trim_to_empty};
pub use variant::{VariantMap, VariantMapError};
pub use width::{is_full_width_sign, to_half_width};
