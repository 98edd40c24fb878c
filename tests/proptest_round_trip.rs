use cipher_tool::cipher::{transform, CipherScheme, Direction};
use proptest::prelude::*;

// Property test configuration
const PROPTEST_CASES: u32 = 256;

// Strategy for keys the keyword cipher accepts
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,16}"
}

// Strategy for mixed text: plain ASCII prose, punctuation-heavy lines,
// or arbitrary Unicode
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ,.!?0-9]{0,120}",
        "[\\x00-\\x7F]{0,120}",
        any::<String>(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn shift_round_trips(text in text_strategy(), shift in -100..=100i32) {
        let scheme = CipherScheme::Shift { shift };
        let encoded = transform(&text, &scheme, Direction::Encode).unwrap();
        let decoded = transform(&encoded, &scheme, Direction::Decode).unwrap();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn shift_zero_is_identity(text in text_strategy()) {
        let scheme = CipherScheme::Shift { shift: 0 };
        let encoded = transform(&text, &scheme, Direction::Encode).unwrap();
        prop_assert_eq!(encoded, text);
    }

    #[test]
    fn shift_preserves_non_letters(text in text_strategy(), shift in -100..=100i32) {
        let scheme = CipherScheme::Shift { shift };
        let encoded = transform(&text, &scheme, Direction::Encode).unwrap();
        for (before, after) in text.chars().zip(encoded.chars()) {
            if !before.is_ascii_alphabetic() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn keyword_round_trips(text in text_strategy(), key in key_strategy()) {
        let scheme = CipherScheme::Keyword { key };
        let encoded = transform(&text, &scheme, Direction::Encode).unwrap();
        let decoded = transform(&encoded, &scheme, Direction::Decode).unwrap();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn keyword_preserves_non_letters(text in text_strategy(), key in key_strategy()) {
        let scheme = CipherScheme::Keyword { key };
        let encoded = transform(&text, &scheme, Direction::Encode).unwrap();
        for (before, after) in text.chars().zip(encoded.chars()) {
            if !before.is_ascii_alphabetic() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn base64_round_trips(text in text_strategy()) {
        let encoded = transform(&text, &CipherScheme::Base64, Direction::Encode).unwrap();
        let decoded = transform(&encoded, &CipherScheme::Base64, Direction::Decode).unwrap();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn hex_round_trips(text in text_strategy()) {
        let encoded = transform(&text, &CipherScheme::Hex, Direction::Encode).unwrap();
        prop_assert!(encoded.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        prop_assert_eq!(encoded.len(), text.len() * 2);
        let decoded = transform(&encoded, &CipherScheme::Hex, Direction::Decode).unwrap();
        prop_assert_eq!(decoded, text);
    }
}
