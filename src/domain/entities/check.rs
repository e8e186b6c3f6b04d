use serde::{Deserialize, Serialize};

use crate::domain::value_objects::status::Status;

/// The immutable result of one diagnostic probe.
///
/// Constructed exactly once when the probe completes and consumed once by
/// the aggregator. `name` must be unique within a single run; `message` may
/// be empty only when the status is PASS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl HealthCheck {
    #[must_use]
    pub fn new(name: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            evidence: None,
        }
    }

    /// Attach free-form supporting detail (captured output, a latency figure).
    #[must_use]
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}
