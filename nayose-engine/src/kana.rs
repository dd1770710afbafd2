//! Kana script and width conversion.
//!
//! Hiragana is folded onto katakana, and the half-width katakana block
//! (U+FF61-U+FF9F) is widened to its full-width counterparts, composing a
//! trailing voiced (ﾞ) or semi-voiced (ﾟ) mark into one precomposed character.

/// Offset between a hiragana and the katakana at the same position.
const KANA_OFFSET: u32 = 0x60;

const HALF_VOICED_MARK: char = '\u{FF9E}';
const HALF_SEMI_VOICED_MARK: char = '\u{FF9F}';

/// Full-width replacements for U+FF61..=U+FF9F, indexed by `c - U+FF61`.
const ZENKAKU_KATAKANA: [char; 63] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー',
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン', '゛', '゜',
];

/// Returns true for hiragana that have a katakana at +0x60 (ぁ..=ん).
#[inline]
pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3093}').contains(&c)
}

/// Returns true for the half-width katakana block, marks included.
#[inline]
pub fn is_hankaku_katakana(c: char) -> bool {
    ('\u{FF61}'..='\u{FF9F}').contains(&c)
}

/// Convert a single hiragana to katakana; anything else is returned as is.
#[inline]
pub fn hiragana_to_katakana_char(c: char) -> char {
    if is_hiragana(c) {
        char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Convert hiragana to katakana
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars().map(hiragana_to_katakana_char).collect()
}

/// Widen one half-width katakana. Marks become the stand-alone ゛ and ゜.
pub fn to_zenkaku_katakana_char(c: char) -> char {
    if is_hankaku_katakana(c) {
        ZENKAKU_KATAKANA[(c as u32 - 0xFF61) as usize]
    } else {
        c
    }
}

/// Compose a half-width base kana with a following half-width mark.
///
/// Returns `None` when the pair has no precomposed full-width form, e.g.
/// ｱﾞ, or when `mark` is not one of ﾞ and ﾟ.
pub fn merge_katakana(base: char, mark: char) -> Option<char> {
    match (mark, base) {
        (HALF_VOICED_MARK, 'ｶ') => Some('ガ'),
        (HALF_VOICED_MARK, 'ｷ') => Some('ギ'),
        (HALF_VOICED_MARK, 'ｸ') => Some('グ'),
        (HALF_VOICED_MARK, 'ｹ') => Some('ゲ'),
        (HALF_VOICED_MARK, 'ｺ') => Some('ゴ'),
        (HALF_VOICED_MARK, 'ｻ') => Some('ザ'),
        (HALF_VOICED_MARK, 'ｼ') => Some('ジ'),
        (HALF_VOICED_MARK, 'ｽ') => Some('ズ'),
        (HALF_VOICED_MARK, 'ｾ') => Some('ゼ'),
        (HALF_VOICED_MARK, 'ｿ') => Some('ゾ'),
        (HALF_VOICED_MARK, 'ﾀ') => Some('ダ'),
        (HALF_VOICED_MARK, 'ﾁ') => Some('ヂ'),
        (HALF_VOICED_MARK, 'ﾂ') => Some('ヅ'),
        (HALF_VOICED_MARK, 'ﾃ') => Some('デ'),
        (HALF_VOICED_MARK, 'ﾄ') => Some('ド'),
        (HALF_VOICED_MARK, 'ﾊ') => Some('バ'),
        (HALF_VOICED_MARK, 'ﾋ') => Some('ビ'),
        (HALF_VOICED_MARK, 'ﾌ') => Some('ブ'),
        (HALF_VOICED_MARK, 'ﾍ') => Some('ベ'),
        (HALF_VOICED_MARK, 'ﾎ') => Some('ボ'),
        (HALF_VOICED_MARK, 'ｳ') => Some('ヴ'),
        (HALF_SEMI_VOICED_MARK, 'ﾊ') => Some('パ'),
        (HALF_SEMI_VOICED_MARK, 'ﾋ') => Some('ピ'),
        (HALF_SEMI_VOICED_MARK, 'ﾌ') => Some('プ'),
        (HALF_SEMI_VOICED_MARK, 'ﾍ') => Some('ペ'),
        (HALF_SEMI_VOICED_MARK, 'ﾎ') => Some('ポ'),
        _ => None,
    }
}

/// Widen every half-width katakana in `text`, composing voiced and
/// semi-voiced marks onto the preceding kana. `None` passes through.
pub fn to_zenkaku_katakana(text: Option<&str>) -> Option<String> {
    let text = text?;
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(merged) = chars.peek().and_then(|&next| merge_katakana(c, next)) {
            out.push(merged);
            chars.next();
            continue;
        }
        out.push(to_zenkaku_katakana_char(c));
    }
    Some(out)
}
