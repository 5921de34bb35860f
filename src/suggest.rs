use crate::distribution::Distribution;
use crate::patterns::PatternCounts;

/// Returned alone when there is no password to evaluate.
pub const EMPTY_PROMPT: &str = "Enter a password to get suggestions";

/// Returned alone when no improvement rule fires.
pub const LOOKS_GOOD: &str =
    "Your password looks good! Remember to use different passwords for different accounts.";

/// Passwords shorter than this draw a lengthening suggestion.
pub const TARGET_LENGTH: usize = 12;

/// Fixed-order rule list; output order is the rule order, so repeated runs
/// produce byte-identical suggestion lists.
pub fn suggestions(
    password: &str,
    distribution: &Distribution,
    patterns: &PatternCounts,
) -> Vec<String> {
    if password.is_empty() {
        return vec![EMPTY_PROMPT.to_string()];
    }

    let mut out: Vec<String> = Vec::new();
    if password.chars().count() < TARGET_LENGTH {
        out.push("Make your password longer (aim for at least 12 characters)".to_string());
    }
    if distribution.lowercase == 0 {
        out.push("Add lowercase letters".to_string());
    }
    if distribution.uppercase == 0 {
        out.push("Add uppercase letters".to_string());
    }
    if distribution.digits == 0 {
        out.push("Add numbers".to_string());
    }
    if distribution.special == 0 {
        out.push("Add special characters (e.g., @, #, $, %)".to_string());
    }
    if patterns.sequential_runs > 0 {
        out.push("Avoid sequential characters (e.g., abc, 123)".to_string());
    }
    if patterns.repeated_runs > 0 {
        out.push("Avoid repeated characters (e.g., aaa, 111)".to_string());
    }
    if patterns.keyboard_substrings > 0 {
        out.push("Avoid keyboard patterns (e.g., qwerty, asdf)".to_string());
    }
    if patterns.common_word_hits > 0 {
        out.push("Avoid common words and patterns".to_string());
    }

    if out.is_empty() {
        out.push(LOOKS_GOOD.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(password: &str) -> Vec<String> {
        suggestions(
            password,
            &Distribution::of(password),
            &PatternCounts::of(password),
        )
    }

    #[test]
    fn empty_password_gets_the_prompt() {
        assert_eq!(evaluate(""), vec![EMPTY_PROMPT.to_string()]);
    }

    #[test]
    fn clean_password_looks_good() {
        // 16 chars, all four classes, no sequential/repeated/keyboard/common
        let out = evaluate("Xk9#mQ2$wL5@pZ8u");
        assert_eq!(out, vec![LOOKS_GOOD.to_string()]);
    }

    #[test]
    fn rule_order_is_fixed() {
        let out = evaluate("abc");
        assert_eq!(
            out,
            vec![
                "Make your password longer (aim for at least 12 characters)".to_string(),
                "Add uppercase letters".to_string(),
                "Add numbers".to_string(),
                "Add special characters (e.g., @, #, $, %)".to_string(),
                "Avoid sequential characters (e.g., abc, 123)".to_string(),
            ]
        );
    }

    #[test]
    fn pattern_rules_fire_per_counter() {
        let out = evaluate("aaaqwepassword");
        assert!(out.iter().any(|s| s.contains("repeated characters")));
        assert!(out.iter().any(|s| s.contains("keyboard patterns")));
        assert!(out.iter().any(|s| s.contains("common words")));
    }

    #[test]
    fn missing_lowercase_suggested() {
        let out = evaluate("X9#Q2$L5@Z8UWT4!");
        assert!(out.contains(&"Add lowercase letters".to_string()));
        assert!(!out.contains(&"Add uppercase letters".to_string()));
    }
}
