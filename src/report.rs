//! Human-readable report rendering for terminal output.
//!
//! Produces a colored summary of one analysis: overall strength with a
//! bounded bar, crack-time estimate, heuristic feedback, improvement
//! suggestions, character composition, and raw figures.
use colored::*;

use crate::analysis::Analysis;

/// Cells in the strength bar; a 0-4 score fills (score+1)/5 of them.
const STRENGTH_BAR_CELLS: usize = 20;

/// Widest composition bar, for the dominant character class.
const COMPOSITION_BAR_CELLS: usize = 24;

/// Composition chart palette: lowercase, uppercase, digits, special, other.
const CLASS_COLORS: [(u8, u8, u8); 5] = [
    (0x4c, 0xaf, 0x50),
    (0x21, 0x96, 0xf3),
    (0xff, 0xc1, 0x07),
    (0xff, 0x57, 0x22),
    (0x9c, 0x27, 0xb0),
];

fn visible_len(s: &str) -> usize {
    // Strip ANSI escape sequences (\x1b[ ... m) to compute printable width
    let mut len = 0;
    let mut iter = s.chars().peekable();
    while let Some(ch) = iter.next() {
        if ch == '\u{1b}' {
            if let Some('[') = iter.peek().cloned() {
                let _ = iter.next();
            }
            for c in iter.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

fn section_header(title: &str) -> String {
    let len = visible_len(title);
    let mut s = String::new();
    s.push('\n');
    s.push_str(title);
    s.push('\n');
    s.push_str(&"─".repeat(len));
    s.push_str("\n\n");
    s
}

fn pct(n: usize, d: usize) -> String {
    if d == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", (n as f64) / (d as f64) * 100.0)
}

fn strength_bar(score: u8) -> String {
    let filled = STRENGTH_BAR_CELLS * (usize::from(score.min(4)) + 1) / 5;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(STRENGTH_BAR_CELLS - filled)
    )
}

fn composition_bar(count: usize, total: usize) -> String {
    let cells = ((count as f64 / total as f64) * COMPOSITION_BAR_CELLS as f64).round() as usize;
    "█".repeat(cells.max(1))
}

pub fn render_report(analysis: &Analysis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        "PwGauge: Password Strength Analysis Results".bold().cyan()
    ));

    // Overall strength
    let (r, g, b) = analysis.strength.color();
    let mut strength_lines: Vec<String> = Vec::new();
    strength_lines.push(format!(
        "Rating: {}",
        analysis.strength.label().truecolor(r, g, b).bold()
    ));
    strength_lines.push(format!(
        "{} {}/4",
        strength_bar(analysis.heuristic.score).truecolor(r, g, b),
        analysis.heuristic.score
    ));
    out.push_str(&section_header(
        &"Overall Strength".bold().yellow().to_string(),
    ));
    for line in strength_lines {
        out.push_str(&line);
        out.push('\n');
    }

    // Crack time
    out.push_str(&section_header(
        &"Estimated Crack Time".bold().cyan().to_string(),
    ));
    out.push_str(&format!(
        "{} {}\n",
        analysis.crack_time.to_string().bold(),
        "(assuming 10 billion guesses per second)".dimmed()
    ));

    // Heuristic feedback
    let mut feedback_lines: Vec<String> = Vec::new();
    match &analysis.heuristic.warning {
        Some(w) => feedback_lines.push(w.yellow().to_string()),
        None => feedback_lines.push("(No warning from the heuristic)".dimmed().to_string()),
    }
    for s in &analysis.heuristic.suggestions {
        feedback_lines.push(format!("  {}", s.dimmed()));
    }
    out.push_str(&section_header(
        &"Heuristic Feedback".bold().cyan().to_string(),
    ));
    for line in feedback_lines {
        out.push_str(&line);
        out.push('\n');
    }

    // Suggestions
    out.push_str(&section_header(
        &"Suggestions to Improve".bold().cyan().to_string(),
    ));
    for s in &analysis.suggestions {
        out.push_str(&format!("  • {}\n", s));
    }

    // Character composition, zero-count classes left out
    let total = analysis.distribution.total();
    let mut composition_lines: Vec<String> = Vec::new();
    if total == 0 {
        composition_lines.push("(No characters to chart)".dimmed().to_string());
    } else {
        let classes = [
            ("Lowercase", analysis.distribution.lowercase),
            ("Uppercase", analysis.distribution.uppercase),
            ("Digits", analysis.distribution.digits),
            ("Special", analysis.distribution.special),
            ("Other", analysis.distribution.other),
        ];
        for ((label, count), (r, g, b)) in classes.into_iter().zip(CLASS_COLORS) {
            if count == 0 {
                continue;
            }
            composition_lines.push(format!(
                "{:<9} {} {} ({})",
                label,
                composition_bar(count, total).truecolor(r, g, b),
                count,
                pct(count, total)
            ));
        }
    }
    out.push_str(&section_header(
        &"Character Composition".bold().cyan().to_string(),
    ));
    for line in composition_lines {
        out.push_str(&line);
        out.push('\n');
    }

    // Raw figures
    let mut detail_lines: Vec<String> = Vec::new();
    detail_lines.push(format!("Length: {} characters", analysis.length));
    detail_lines.push(format!("Entropy: {:.2} bits", analysis.entropy_bits));
    detail_lines.push(format!("Alphabet size: {}", analysis.alphabet_size));
    let pattern_total = analysis.patterns.total();
    if pattern_total > 0 {
        detail_lines.push(format!("Patterns detected: {}", pattern_total));
        for (label, count) in [
            ("Sequential runs", analysis.patterns.sequential_runs),
            ("Repeated runs", analysis.patterns.repeated_runs),
            ("Keyboard patterns", analysis.patterns.keyboard_substrings),
            ("Common words", analysis.patterns.common_word_hits),
        ] {
            if count > 0 {
                detail_lines.push(format!("  {}: {}", label, count));
            }
        }
    }
    out.push_str(&section_header(
        &"Password Details".bold().magenta().to_string(),
    ));
    for line in detail_lines {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analysis;

    #[test]
    fn report_contains_all_sections() {
        let s = render_report(&Analysis::of("Tr0ub4dor&3"));
        for section in [
            "Password Strength Analysis Results",
            "Overall Strength",
            "Estimated Crack Time",
            "Heuristic Feedback",
            "Suggestions to Improve",
            "Character Composition",
            "Password Details",
        ] {
            assert!(s.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn weak_password_reports_patterns() {
        let s = render_report(&Analysis::of("qwerty123"));
        assert!(s.contains("Patterns detected"));
        assert!(s.contains("Keyboard patterns"));
        assert!(s.contains("Avoid keyboard patterns"));
    }

    #[test]
    fn empty_password_has_no_chart_but_a_prompt() {
        let s = render_report(&Analysis::of(""));
        assert!(s.contains("No characters to chart"));
        assert!(s.contains(crate::suggest::EMPTY_PROMPT));
        assert!(s.contains("Length: 0 characters"));
    }

    #[test]
    fn composition_filters_zero_classes() {
        // all-lowercase password charts one class only
        let s = render_report(&Analysis::of("abcdef"));
        assert!(s.contains("Lowercase"));
        assert!(!s.contains("Uppercase"));
        assert!(!s.contains("Digits"));
    }

    #[test]
    fn strength_bar_is_bounded() {
        for score in 0..=4u8 {
            let bar = strength_bar(score);
            let cells = bar.chars().filter(|c| *c == '█' || *c == '░').count();
            assert_eq!(cells, STRENGTH_BAR_CELLS);
        }
        assert_eq!(strength_bar(0).chars().filter(|c| *c == '█').count(), 4);
        assert_eq!(strength_bar(4).chars().filter(|c| *c == '█').count(), 20);
    }

    #[test]
    fn pct_handles_zero_denominator() {
        assert_eq!(pct(1, 0), "0.00%");
        assert_eq!(pct(1, 4), "25.00%");
    }
}
