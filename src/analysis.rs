//! Analysis value object: one evaluation of one password.
//!
//! [`Analysis::of`] runs every metric exactly once and assembles the result.
//! Nothing here is cached or shared; every call is an independent,
//! synchronous computation over the input string, so analyzing the same
//! password twice yields identical results.
//!
//! The password itself is never stored; the analysis carries only derived
//! figures, which keeps report files safe to share.
use serde::Serialize;

use crate::cracktime::CrackTimeEstimate;
use crate::distribution::Distribution;
use crate::entropy;
use crate::patterns::PatternCounts;
use crate::score::{self, HeuristicVerdict, Strength};
use crate::suggest;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub length: usize,
    pub entropy_bits: f64,
    pub alphabet_size: usize,
    pub distribution: Distribution,
    pub patterns: PatternCounts,
    pub crack_time: CrackTimeEstimate,
    pub heuristic: HeuristicVerdict,
    pub strength: Strength,
    pub suggestions: Vec<String>,
}

impl Analysis {
    /// Evaluate a password. Total over any finite string, the empty one
    /// included.
    pub fn of(password: &str) -> Self {
        let distribution = Distribution::of(password);
        let patterns = PatternCounts::of(password);
        let entropy_bits = entropy::entropy_bits(password);
        let heuristic = score::score_or_default(password);
        let strength = Strength::from_score(heuristic.score);
        let suggestions = suggest::suggestions(password, &distribution, &patterns);
        Self {
            length: password.chars().count(),
            entropy_bits,
            alphabet_size: entropy::alphabet_size(password),
            distribution,
            patterns,
            crack_time: CrackTimeEstimate::from_entropy(entropy_bits),
            heuristic,
            strength,
            suggestions,
        }
    }
}
