//! Space-delimited character tokens for search indexes.
//!
//! Every character becomes its own token, except that a full-width
//! parenthesis followed by one character and a closing parenthesis, like
//! `（株）`, is kept together. An ideographic space right after a token is
//! dropped, since the token separator already stands for it.

const OPEN_PAREN: char = '（';
const CLOSE_PAREN: char = '）';
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    /// The previous character was `（`.
    SeenOpenParen,
    /// `（` and one more character are pending.
    InsideParen,
}

/// Render `text` as space-separated tokens.
///
/// ```
/// use nayose_engine::ngram::to_ngram;
///
/// assert_eq!(to_ngram("あいう"), "あ い う");
/// assert_eq!(to_ngram("（株）テスト"), "（株） テ ス ト");
/// ```
pub fn to_ngram(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(text.len() * 2);
    let mut state = ScanState::Normal;

    let mut j = 0;
    while j < len {
        let c = chars[j];
        match state {
            ScanState::Normal => {
                if c == OPEN_PAREN {
                    state = ScanState::SeenOpenParen;
                    j += 1;
                    continue;
                }
            }
            ScanState::SeenOpenParen => {
                state = ScanState::InsideParen;
                j += 1;
                continue;
            }
            ScanState::InsideParen => {
                state = ScanState::Normal;
                out.push(chars[j - 2]);
                if c != CLOSE_PAREN {
                    out.push(' ');
                }
                out.push(chars[j - 1]);
                if c != CLOSE_PAREN {
                    out.push(' ');
                }
            }
        }

        out.push(c);
        if j + 1 < len {
            out.push(' ');
            if chars[j + 1] == IDEOGRAPHIC_SPACE {
                j += 1;
            }
        }
        j += 1;
    }

    // Unclosed group at end of input
    match state {
        ScanState::Normal => {}
        ScanState::SeenOpenParen => out.push(chars[len - 1]),
        ScanState::InsideParen => {
            out.push(chars[len - 2]);
            out.push(' ');
            out.push(chars[len - 1]);
        }
    }
    out
}
