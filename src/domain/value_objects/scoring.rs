use serde::{Deserialize, Serialize};

use crate::domain::value_objects::status::Status;

/// Per-severity point table used by the aggregator.
///
/// Every check can earn at most one point; each weight is the fraction of
/// that point its status earns. PASS gets full credit, WARN half (degraded
/// but functioning), SKIP and FAIL nothing. A SKIP still counts toward the
/// maximum: an environment that cannot run a check does not get credit for
/// it, but SKIP never forces a failing overall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_pass")]
    pub pass: f64,
    #[serde(default = "default_warn")]
    pub warn: f64,
    #[serde(default)]
    pub skip: f64,
    #[serde(default)]
    pub fail: f64,
}

const fn default_pass() -> f64 {
    1.0
}

const fn default_warn() -> f64 {
    0.5
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            pass: default_pass(),
            warn: default_warn(),
            skip: 0.0,
            fail: 0.0,
        }
    }
}

impl ScoringWeights {
    /// Points contributed by one check with the given status.
    #[must_use]
    pub const fn weight(&self, status: Status) -> f64 {
        match status {
            Status::Pass => self.pass,
            Status::Skip => self.skip,
            Status::Warn => self.warn,
            Status::Fail => self.fail,
        }
    }

    /// Clamp every weight into `[0, 1]` so that any policy keeps the score
    /// within `0 <= score <= max_score`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            pass: self.pass.clamp(0.0, 1.0),
            warn: self.warn.clamp(0.0, 1.0),
            skip: self.skip.clamp(0.0, 1.0),
            fail: self.fail.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights() {
        let weights = ScoringWeights::default();
        assert!((weights.weight(Status::Pass) - 1.0).abs() < f64::EPSILON);
        assert!((weights.weight(Status::Warn) - 0.5).abs() < f64::EPSILON);
        assert!(weights.weight(Status::Skip).abs() < f64::EPSILON);
        assert!(weights.weight(Status::Fail).abs() < f64::EPSILON);
    }

    #[test]
    fn clamped_bounds_out_of_range_weights() {
        let weights = ScoringWeights {
            pass: 2.0,
            warn: -0.5,
            skip: 0.25,
            fail: 1.5,
        }
        .clamped();
        assert!((weights.pass - 1.0).abs() < f64::EPSILON);
        assert!(weights.warn.abs() < f64::EPSILON);
        assert!((weights.skip - 0.25).abs() < f64::EPSILON);
        assert!((weights.fail - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clamped_keeps_valid_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.clamped(), weights);
    }
}
