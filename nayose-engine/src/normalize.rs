//! Lookup-key normalization.
//!
//! A key is normalized in four passes:
//! 1. hiragana is shifted to katakana,
//! 2. each character is replaced by its canonical form from the [`VariantMap`],
//! 3. ASCII whitespace and the ideographic space are removed,
//! 4. half-width katakana is widened, composing voiced and semi-voiced marks.
//!
//! Variant lookup sees the katakana form, so the table can fold katakana
//! variants such as ヱ→エ for input typed in either script.

use crate::kana::{hiragana_to_katakana_char, to_zenkaku_katakana};
use crate::variant::{self, VariantMap};

/// Whitespace removed from keys: space, \t, \n, \x0B, \x0C, \r and U+3000.
#[inline]
fn is_key_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{3000}')
}

/// Normalizes keys against a borrowed variant table.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'m> {
    variants: &'m VariantMap,
}

impl<'m> Normalizer<'m> {
    pub fn new(variants: &'m VariantMap) -> Self {
        Self { variants }
    }

    pub fn variants(&self) -> &'m VariantMap {
        self.variants
    }

    /// Normalize a key. `None` passes through.
    pub fn normalize(&self, text: Option<&str>) -> Option<String> {
        let text = text?;
        let folded: String = text
            .chars()
            .map(|c| self.variants.resolve(hiragana_to_katakana_char(c)))
            .filter(|&c| !is_key_space(c))
            .collect();
        to_zenkaku_katakana(Some(folded.as_str()))
    }

    /// 64-bit key hash of the normalized form, see [`crate::hash`].
    pub fn hash(&self, text: &str) -> u64 {
        let normalized = self.normalize(Some(text)).unwrap_or_default();
        crate::hash::digest(&normalized)
    }
}

impl Normalizer<'static> {
    /// Normalizer over the process-wide table.
    pub fn global() -> Self {
        Self::new(variant::global())
    }
}

/// Normalize a key against the process-wide variant table.
pub fn normalize(text: Option<&str>) -> Option<String> {
    Normalizer::global().normalize(text)
}
