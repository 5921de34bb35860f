use std::fmt;

use serde::Serialize;

/// Assumed brute-force rate of a well-resourced attacker.
pub const GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Years => "years",
        };
        f.write_str(s)
    }
}

/// Wall-clock crack-time estimate derived from an entropy figure. Values past
/// the day threshold are expressed in years with no upper cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrackTimeEstimate {
    pub magnitude: f64,
    pub unit: TimeUnit,
}

impl CrackTimeEstimate {
    pub fn from_entropy(bits: f64) -> Self {
        let seconds = bits.exp2() / GUESSES_PER_SECOND;
        if seconds < SECONDS_PER_MINUTE {
            Self {
                magnitude: seconds,
                unit: TimeUnit::Seconds,
            }
        } else if seconds < SECONDS_PER_HOUR {
            Self {
                magnitude: seconds / SECONDS_PER_MINUTE,
                unit: TimeUnit::Minutes,
            }
        } else if seconds < SECONDS_PER_DAY {
            Self {
                magnitude: seconds / SECONDS_PER_HOUR,
                unit: TimeUnit::Hours,
            }
        } else if seconds < SECONDS_PER_YEAR {
            Self {
                magnitude: seconds / SECONDS_PER_DAY,
                unit: TimeUnit::Days,
            }
        } else {
            Self {
                magnitude: seconds / SECONDS_PER_YEAR,
                unit: TimeUnit::Years,
            }
        }
    }
}

impl fmt::Display for CrackTimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.magnitude, self.unit)
    }
}
