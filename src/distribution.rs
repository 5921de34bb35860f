use serde::Serialize;

/// Character-class histogram of a password. Each character lands in exactly
/// one field, so the field sum always equals the character count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub lowercase: usize,
    pub uppercase: usize,
    pub digits: usize,
    pub special: usize,
    pub other: usize,
}

impl Distribution {
    /// Classify every character in a single pass.
    pub fn of(password: &str) -> Self {
        let mut d = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                d.lowercase += 1;
            } else if c.is_ascii_uppercase() {
                d.uppercase += 1;
            } else if c.is_ascii_digit() {
                d.digits += 1;
            } else if c.is_ascii_punctuation() {
                d.special += 1;
            } else {
                d.other += 1;
            }
        }
        d
    }

    pub fn total(&self) -> usize {
        self.lowercase + self.uppercase + self.digits + self.special + self.other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_class() {
        let d = Distribution::of("aB3!~ ");
        assert_eq!(d.lowercase, 1);
        assert_eq!(d.uppercase, 1);
        assert_eq!(d.digits, 1);
        assert_eq!(d.special, 2);
        assert_eq!(d.other, 1); // the space
    }

    #[test]
    fn total_equals_char_count() {
        for pw in ["", "abc", "P@ssw0rd!", "héllo wörld", "日本語123"] {
            let d = Distribution::of(pw);
            assert_eq!(d.total(), pw.chars().count(), "password: {pw:?}");
        }
    }

    #[test]
    fn non_ascii_is_other() {
        let d = Distribution::of("日本語");
        assert_eq!(d.other, 3);
        assert_eq!(d.total(), 3);
    }
}
