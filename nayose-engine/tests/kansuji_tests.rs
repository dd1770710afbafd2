//! Integration tests for kansuji conversion

use nayose_engine::{KansujiError, convert_kansuji, kanji_digit, parse_kansuji, to_kanji};

#[test]
fn test_convert_kansuji_examples() {
    let cases = [
        ("一", "1"),
        ("十", "10"),
        ("十一", "11"),
        ("二十一", "21"),
        ("百", "100"),
        ("百二十三", "123"),
        ("千", "1000"),
        ("一万", "10000"),
        ("一億", "100000000"),
        ("零", "0"),
    ];
    for (kanji, expected) in cases {
        assert_eq!(convert_kansuji(kanji).unwrap(), expected, "{kanji}");
    }
}

#[test]
fn test_large_values() {
    assert_eq!(
        parse_kansuji("九千九百九十九億九千九百九十九万九千九百九十九"),
        Ok(999_999_999_999)
    );
    assert_eq!(parse_kansuji("二千二十五"), Ok(2025));
}

#[test]
fn test_invalid_input_is_recoverable() {
    assert_eq!(convert_kansuji(""), Err(KansujiError::Empty));
    match convert_kansuji("三十x") {
        Err(KansujiError::InvalidCharacter { ch, position }) => {
            assert_eq!(ch, 'x');
            assert_eq!(position, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_to_kanji_bounds() {
    assert_eq!(to_kanji(0).as_deref(), Some("〇"));
    assert_eq!(to_kanji(34).as_deref(), Some("三十四"));
    assert_eq!(to_kanji(100).as_deref(), Some("百"));
    assert_eq!(to_kanji(101), None);
    assert_eq!(to_kanji(-1), None);
    assert_eq!(to_kanji(i64::MAX), None);
}

#[test]
fn test_round_trip_small_values() {
    for n in 0..=100 {
        let kanji = to_kanji(n).unwrap();
        assert_eq!(convert_kansuji(&kanji).unwrap(), n.to_string());
    }
}

#[test]
fn test_kanji_digit_table() {
    let digits: String = (1..=10).map(kanji_digit).collect();
    assert_eq!(digits, "一二三四五六七八九十");
    assert_eq!(kanji_digit(-3), "");
}
