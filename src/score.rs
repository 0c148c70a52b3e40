use strum_macros::Display;

/// Percentage of `correct` out of `total`, or `None` for an empty quiz.
pub fn percentage(correct: usize, total: usize) -> Option<f64> {
    match total {
        positive if positive > 0 => Some(correct as f64 * 100.0 / total as f64),
        _ => None,
    }
}

/// Outcome bucket for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Grade {
    Perfect,
    Pass,
    Fail,
}

pub const PASS_THRESHOLD: f64 = 80.0;

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 100.0 {
            Grade::Perfect
        } else if score >= PASS_THRESHOLD {
            Grade::Pass
        } else {
            Grade::Fail
        }
    }
}
