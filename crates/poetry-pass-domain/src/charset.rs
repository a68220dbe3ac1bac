//! Character class checks

use std::ops::RangeInclusive;

/// The CJK Unified Ideographs block, the whole set of acceptable characters
pub const COMMON_IDEOGRAPHS: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

/// Check whether a single character lies in the common ideograph block
pub fn is_common_ideograph(c: char) -> bool {
    COMMON_IDEOGRAPHS.contains(&c)
}

/// Check whether `text` contains any character outside U+4E00..=U+9FFF
///
/// Anything outside the block counts as rare: punctuation, digits, Latin
/// letters and whitespace included, not only uncommon ideographs. The empty
/// string contains nothing rare.
pub fn contains_rare_chars(text: &str) -> bool {
    text.chars().any(|c| !is_common_ideograph(c))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: strings drawn from the block are never rare
        #[test]
        fn test_block_strings_never_rare(s in "[\u{4E00}-\u{9FFF}]{0,16}") {
            prop_assert!(!contains_rare_chars(&s));
        }

        /// Property: the predicate agrees with a per-character scan
        #[test]
        fn test_matches_char_scan(s in "\\PC{0,16}") {
            let expected = !s.chars().all(is_common_ideograph);
            prop_assert_eq!(contains_rare_chars(&s), expected);
        }
    }
}
