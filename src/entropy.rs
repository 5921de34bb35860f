/// Size of the ASCII punctuation class (the 32 characters matched by
/// `char::is_ascii_punctuation`).
pub const PUNCTUATION_CLASS_SIZE: usize = 32;

/// Alphabet size assumed when no known character class is present, so that
/// non-ASCII input never produces a zero or undefined log.
pub const FALLBACK_ALPHABET_SIZE: usize = 10;

/// Sum the sizes of the character classes actually observed in the password.
pub fn alphabet_size(password: &str) -> usize {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| c.is_ascii_punctuation()) {
        size += PUNCTUATION_CLASS_SIZE;
    }
    if size == 0 { FALLBACK_ALPHABET_SIZE } else { size }
}

/// Coarse entropy estimate in bits: log2(alphabet size) * character count.
/// The empty password is exactly zero.
pub fn entropy_bits(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    (alphabet_size(password) as f64).log2() * password.chars().count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(entropy_bits(""), 0.0);
    }

    #[test]
    fn alphabet_grows_with_classes() {
        assert_eq!(alphabet_size("abc"), 26);
        assert_eq!(alphabet_size("aB"), 52);
        assert_eq!(alphabet_size("aB1"), 62);
        assert_eq!(alphabet_size("aB1!"), 94);
    }

    #[test]
    fn fallback_alphabet_for_unclassified_input() {
        assert_eq!(alphabet_size("日本語"), FALLBACK_ALPHABET_SIZE);
        let bits = entropy_bits("日本語");
        assert!((bits - (10f64).log2() * 3.0).abs() < 1e-9);
    }

    #[test]
    fn monotonic_in_length_for_fixed_classes() {
        let mut prev = 0.0;
        for len in 1..=32 {
            let pw = "a".repeat(len);
            let bits = entropy_bits(&pw);
            assert!(bits > prev);
            prev = bits;
        }
    }

    #[test]
    fn lowercase_only_formula() {
        let bits = entropy_bits("abcdef");
        assert!((bits - (26f64).log2() * 6.0).abs() < 1e-9);
    }
}
