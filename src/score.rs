//! Strength classification: consumes the zxcvbn heuristic as a black box and
//! maps its 0-4 score onto a fixed label/color pair for rendering.
//!
//! The heuristic is the only externally-sourced failure point in the whole
//! analysis. [`score_or_default`] degrades any such failure to the weakest
//! verdict instead of propagating it; [`try_score`] is the fallible seam for
//! callers that want to observe the error.
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum HeuristicError {
    #[error("heuristic scoring failed: {0}")]
    Scoring(#[from] zxcvbn::ZxcvbnError),
}

/// What the heuristic library had to say: the 0-4 score plus its own
/// warning and suggestion strings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct HeuristicVerdict {
    pub score: u8,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

pub fn try_score(password: &str) -> Result<HeuristicVerdict, HeuristicError> {
    let entropy = zxcvbn::zxcvbn(password, &[])?;
    let (warning, suggestions) = match entropy.feedback() {
        Some(f) => (
            f.warning().map(|w| w.to_string()),
            f.suggestions().iter().map(|s| s.to_string()).collect(),
        ),
        None => (None, Vec::new()),
    };
    Ok(HeuristicVerdict {
        score: entropy.score(),
        warning,
        suggestions,
    })
}

/// Score a password, treating heuristic failure (including the blank-password
/// refusal) as the weakest verdict with no feedback.
pub fn score_or_default(password: &str) -> HeuristicVerdict {
    match try_score(password) {
        Ok(verdict) => verdict,
        Err(e) => {
            log::debug!("falling back to default verdict: {}", e);
            HeuristicVerdict::default()
        }
    }
}

/// Five-step strength classification derived from the heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Map a heuristic score onto the scale. Anything outside 0-4 collapses
    /// to the weakest step.
    pub fn from_score(score: u8) -> Self {
        match score {
            1 => Strength::Weak,
            2 => Strength::Medium,
            3 => Strength::Strong,
            4 => Strength::VeryStrong,
            _ => Strength::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    /// RGB color token for this step, passed explicitly to the renderer.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Strength::VeryWeak => (0xff, 0x00, 0x00),
            Strength::Weak => (0xff, 0x45, 0x00),
            Strength::Medium => (0xff, 0xa5, 0x00),
            Strength::Strong => (0x9a, 0xcd, 0x32),
            Strength::VeryStrong => (0x00, 0x80, 0x00),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_mapping_covers_scale() {
        assert_eq!(Strength::from_score(0), Strength::VeryWeak);
        assert_eq!(Strength::from_score(1), Strength::Weak);
        assert_eq!(Strength::from_score(2), Strength::Medium);
        assert_eq!(Strength::from_score(3), Strength::Strong);
        assert_eq!(Strength::from_score(4), Strength::VeryStrong);
    }

    #[test]
    fn out_of_range_defaults_to_weakest() {
        assert_eq!(Strength::from_score(5), Strength::VeryWeak);
        assert_eq!(Strength::from_score(255), Strength::VeryWeak);
    }

    #[test]
    fn labels_match_scale() {
        assert_eq!(Strength::VeryWeak.label(), "Very Weak");
        assert_eq!(Strength::VeryStrong.label(), "Very Strong");
    }

    #[test]
    fn blank_password_degrades_to_default() {
        let v = score_or_default("");
        assert_eq!(v.score, 0);
        assert!(v.warning.is_none());
        assert!(v.suggestions.is_empty());
    }

    #[test]
    fn top_ten_password_scores_zero() {
        let v = score_or_default("password");
        assert_eq!(v.score, 0);
    }

    #[test]
    fn try_score_rejects_blank() {
        assert!(try_score("").is_err());
    }
}
