use std::collections::HashSet;

use chrono::Utc;
use thiserror::Error;

use crate::domain::entities::check::HealthCheck;
use crate::domain::entities::report::HealthReport;
use crate::domain::value_objects::scoring::ScoringWeights;
use crate::domain::value_objects::status::Status;

/// Contract violation in the sequence handed to [`Aggregator::aggregate`].
///
/// These are caller bugs, not probe failures. A broken subsystem is ordinary
/// data (a FAIL check); a malformed check must never be normalized into a
/// report, since masking it would itself be a health-reporting defect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("check at index {index} has an empty name")]
    EmptyName { index: usize },
    #[error("duplicate check name within one run: {name}")]
    DuplicateName { name: String },
    #[error("check '{name}' reported {status} without a message")]
    MissingMessage { name: String, status: Status },
}

/// Folds one run's completed checks into a [`HealthReport`].
///
/// Pure and stateless: no I/O and no state retained between calls. The
/// overall status is the worst severity present — a single FAIL dominates
/// any number of passing checks — and the score is the weighted sum from the
/// [`ScoringWeights`] table, with one point achievable per check.
pub struct Aggregator {
    weights: ScoringWeights,
}

impl Aggregator {
    /// Creates an aggregator with the given scoring policy. Weights are
    /// clamped into `[0, 1]` so `0 <= score <= max_score` holds regardless
    /// of the configured table.
    #[must_use]
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights: weights.clamped(),
        }
    }

    /// Aggregate a completed, ordered sequence of checks into a report.
    ///
    /// The input order is preserved verbatim. An empty sequence is not an
    /// error: it yields the neutral PASS report with `score == max_score == 0`.
    ///
    /// # Errors
    ///
    /// Returns `AggregateError` if a check violates the probe contract:
    /// empty name, duplicate name within the run, or a missing message on a
    /// non-PASS check.
    pub fn aggregate(&self, checks: Vec<HealthCheck>) -> Result<HealthReport, AggregateError> {
        Self::validate(&checks)?;

        let mut overall = Status::Pass;
        let mut score = 0.0;
        for check in &checks {
            overall = overall.max(check.status);
            score += self.weights.weight(check.status);
        }

        #[allow(clippy::cast_precision_loss)]
        let max_score = checks.len() as f64;

        Ok(HealthReport {
            overall,
            score,
            max_score,
            checks,
            timestamp: Utc::now(),
        })
    }

    fn validate(checks: &[HealthCheck]) -> Result<(), AggregateError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(checks.len());
        for (index, check) in checks.iter().enumerate() {
            if check.name.is_empty() {
                return Err(AggregateError::EmptyName { index });
            }
            if !seen.insert(check.name.as_str()) {
                return Err(AggregateError::DuplicateName {
                    name: check.name.clone(),
                });
            }
            if check.status != Status::Pass && check.message.is_empty() {
                return Err(AggregateError::MissingMessage {
                    name: check.name.clone(),
                    status: check.status,
                });
            }
        }
        Ok(())
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}
