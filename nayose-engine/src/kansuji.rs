//! Kansuji (kanji numeral) conversion.
//!
//! Parsing handles positive integers written with 一..九, the place markers
//! 十 百 千 and the magnitude markers 万 億, e.g. 三億二千万五十六. Formatting
//! is limited to 0..=100.

/// Errors that can occur while parsing kansuji.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KansujiError {
    #[error("kansuji input is empty")]
    Empty,

    #[error("invalid kanji character found: '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("kansuji value does not fit in 64 bits")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, KansujiError>;

/// One numeral character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numeral {
    /// 一..九: replaces the pending digit.
    Digit(u64),
    /// 十 百 千: multiplies the pending digit into the current group.
    Place(u64),
    /// 万 億: folds the current group into the total.
    Magnitude(u64),
}

impl Numeral {
    fn from_char(c: char) -> Option<Self> {
        let numeral = match c {
            '一' => Numeral::Digit(1),
            '二' => Numeral::Digit(2),
            '三' => Numeral::Digit(3),
            '四' => Numeral::Digit(4),
            '五' => Numeral::Digit(5),
            '六' => Numeral::Digit(6),
            '七' => Numeral::Digit(7),
            '八' => Numeral::Digit(8),
            '九' => Numeral::Digit(9),
            '十' => Numeral::Place(10),
            '百' => Numeral::Place(100),
            '千' => Numeral::Place(1_000),
            '万' => Numeral::Magnitude(10_000),
            '億' => Numeral::Magnitude(100_000_000),
            _ => return None,
        };
        Some(numeral)
    }
}

/// Positional accumulator. `digit` starts at 1 so a leading marker counts once.
#[derive(Debug)]
struct Accumulator {
    digit: u64,
    group: u64,
    total: u64,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            digit: 1,
            group: 0,
            total: 0,
        }
    }

    fn step(&mut self, numeral: Numeral) -> Option<()> {
        match numeral {
            Numeral::Digit(d) => self.digit = d,
            Numeral::Place(place) => {
                let multiplier = if self.digit != 0 { self.digit } else { 1 };
                self.group = self.group.checked_add(multiplier.checked_mul(place)?)?;
                self.digit = 0;
            }
            Numeral::Magnitude(magnitude) => {
                self.group = self.group.checked_add(self.digit)?;
                let multiplier = if self.group != 0 { self.group } else { 1 };
                self.total = self.total.checked_add(multiplier.checked_mul(magnitude)?)?;
                self.group = 0;
                self.digit = 0;
            }
        }
        Some(())
    }

    fn finish(self) -> Option<u64> {
        self.total.checked_add(self.group)?.checked_add(self.digit)
    }
}

/// Parse kansuji into an integer.
///
/// "零" and "〇" on their own are zero; anywhere else they are invalid.
pub fn parse_kansuji(text: &str) -> Result<u64> {
    if text.is_empty() {
        return Err(KansujiError::Empty);
    }
    if text == "零" || text == "〇" {
        return Ok(0);
    }

    let mut acc = Accumulator::new();
    for (position, ch) in text.chars().enumerate() {
        let numeral =
            Numeral::from_char(ch).ok_or(KansujiError::InvalidCharacter { ch, position })?;
        acc.step(numeral).ok_or(KansujiError::Overflow)?;
    }
    acc.finish().ok_or(KansujiError::Overflow)
}

/// Parse kansuji and render the value as decimal digits, e.g. "百二十三" → "123".
pub fn convert_kansuji(text: &str) -> Result<String> {
    parse_kansuji(text).map(|value| value.to_string())
}

/// Kanji for 1..=10; empty for anything else.
pub fn kanji_digit(n: i64) -> &'static str {
    match n {
        1 => "一",
        2 => "二",
        3 => "三",
        4 => "四",
        5 => "五",
        6 => "六",
        7 => "七",
        8 => "八",
        9 => "九",
        10 => "十",
        _ => "",
    }
}

/// Write `n` in kansuji. Only 0..=100 is representable; anything else is `None`.
pub fn to_kanji(n: i64) -> Option<String> {
    match n {
        0 => Some("〇".to_string()),
        1..=10 => Some(kanji_digit(n).to_string()),
        11..=99 => {
            let (tens, ones) = (n / 10, n % 10);
            let mut out = String::new();
            if tens > 1 {
                out.push_str(kanji_digit(tens));
            }
            out.push('十');
            if ones > 0 {
                out.push_str(kanji_digit(ones));
            }
            Some(out)
        }
        100 => Some("百".to_string()),
        _ => None,
    }
}
