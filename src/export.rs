//! Export helpers for writing analysis results to report files.
//!
//! - `save_report_json` writes the full serialized analysis, pretty-printed.
//! - `save_summary_txt` writes a plain, uncolored key/value summary.
//!
//! Neither artifact contains the password itself, only derived figures.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::Analysis;

pub fn save_report_json<P: AsRef<Path>>(analysis: &Analysis, path: P) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("create {}", path.as_ref().display()))?;
    serde_json::to_writer_pretty(file, analysis)
        .with_context(|| format!("serialize analysis to {}", path.as_ref().display()))?;
    Ok(())
}

pub fn save_summary_txt<P: AsRef<Path>>(analysis: &Analysis, path: P) -> Result<()> {
    let mut f = File::create(&path)
        .with_context(|| format!("create {}", path.as_ref().display()))?;
    writeln!(f, "Rating: {} ({}/4)", analysis.strength.label(), analysis.heuristic.score)?;
    writeln!(f, "Length: {} characters", analysis.length)?;
    writeln!(f, "Entropy: {:.2} bits", analysis.entropy_bits)?;
    writeln!(f, "Alphabet size: {}", analysis.alphabet_size)?;
    writeln!(f, "Estimated crack time: {}", analysis.crack_time)?;
    writeln!(
        f,
        "Composition: lowercase={} uppercase={} digits={} special={} other={}",
        analysis.distribution.lowercase,
        analysis.distribution.uppercase,
        analysis.distribution.digits,
        analysis.distribution.special,
        analysis.distribution.other
    )?;
    writeln!(
        f,
        "Patterns: sequential={} repeated={} keyboard={} common-words={}",
        analysis.patterns.sequential_runs,
        analysis.patterns.repeated_runs,
        analysis.patterns.keyboard_substrings,
        analysis.patterns.common_word_hits
    )?;
    if let Some(w) = &analysis.heuristic.warning {
        writeln!(f, "Warning: {}", w)?;
    }
    writeln!(f, "Suggestions:")?;
    for s in &analysis.suggestions {
        writeln!(f, "  - {}", s)?;
    }
    Ok(())
}
