//! Full-width to half-width conversion for Latin letters, digits and signs.

/// Distance between a full-width ASCII form and its half-width original ('Ａ' - 'A').
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Full-width signs folded by [`to_half_width`].
///
/// '−' (U+2212) sits below the full-width block, so it has no character at
/// -0xFEE0 and is folded to '-' instead.
pub const FULL_WIDTH_SIGNS: [char; 28] = [
    '！', '＃', '＄', '％', '＆', '（', '）', '＊', '＋', '，', '−', '－', '．', '／', '：', '；',
    '＜', '＝', '＞', '？', '＠', '［', '］', '＾', '＿', '｛', '｜', '｝',
];

/// Character classes relevant to width folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    FullWidthUpper,
    FullWidthLower,
    FullWidthDigit,
    FullWidthSign,
    Hiragana,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            '\u{FF21}'..='\u{FF3A}' => CharClass::FullWidthUpper,
            '\u{FF41}'..='\u{FF5A}' => CharClass::FullWidthLower,
            '\u{FF10}'..='\u{FF19}' => CharClass::FullWidthDigit,
            c if is_full_width_sign(c) => CharClass::FullWidthSign,
            c if crate::kana::is_hiragana(c) => CharClass::Hiragana,
            _ => CharClass::Other,
        }
    }

    /// Whether [`to_half_width`] shifts characters of this class.
    pub fn is_foldable(self) -> bool {
        matches!(
            self,
            CharClass::FullWidthUpper
                | CharClass::FullWidthLower
                | CharClass::FullWidthDigit
                | CharClass::FullWidthSign
        )
    }
}

pub fn is_full_width_sign(c: char) -> bool {
    FULL_WIDTH_SIGNS.contains(&c)
}

/// Fold one character to half width, or return it unchanged.
pub fn to_half_width_char(c: char) -> char {
    if !CharClass::of(c).is_foldable() {
        return c;
    }
    (c as u32)
        .checked_sub(FULL_WIDTH_OFFSET)
        .and_then(char::from_u32)
        .unwrap_or('-')
}

/// Convert full-width A-Z, a-z, 0-9 and the [`FULL_WIDTH_SIGNS`] to half width.
///
/// The output has the same number of characters as the input. `None` passes through.
pub fn to_half_width(text: Option<&str>) -> Option<String> {
    Some(text?.chars().map(to_half_width_char).collect())
}
