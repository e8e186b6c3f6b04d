use std::time::Duration;

use futures::future::join_all;

use crate::domain::aggregate::{AggregateError, Aggregator};
use crate::domain::entities::check::HealthCheck;
use crate::domain::entities::report::HealthReport;
use crate::domain::ports::probe::Probe;
use crate::domain::value_objects::status::Status;

/// Executes one run's probes and aggregates their results.
///
/// This is the barrier between the impure probe layer and the pure
/// aggregator: every probe resolves to a terminal check before aggregation
/// starts. A probe exceeding its deadline is translated into a FAIL entry,
/// never into an absent one, and results keep registration order regardless
/// of completion order.
pub struct ProbeRunner<'a> {
    probes: &'a [Box<dyn Probe>],
    timeout: Duration,
    aggregator: &'a Aggregator,
}

impl<'a> ProbeRunner<'a> {
    #[must_use]
    pub const fn new(
        probes: &'a [Box<dyn Probe>],
        timeout: Duration,
        aggregator: &'a Aggregator,
    ) -> Self {
        Self {
            probes,
            timeout,
            aggregator,
        }
    }

    /// Run every probe once and fold the completed results into a report.
    ///
    /// # Errors
    ///
    /// Returns `AggregateError` if the collected checks violate the probe
    /// contract (empty or duplicate names, missing messages).
    pub async fn run_once(&self) -> Result<HealthReport, AggregateError> {
        let checks = self.collect().await;
        self.aggregator.aggregate(checks)
    }

    /// Run all probes concurrently and collect their terminal checks in
    /// registration order.
    pub async fn collect(&self) -> Vec<HealthCheck> {
        let futures = self.probes.iter().map(|probe| self.run_probe(probe.as_ref()));
        join_all(futures).await
    }

    async fn run_probe(&self, probe: &dyn Probe) -> HealthCheck {
        match tokio::time::timeout(self.timeout, probe.run()).await {
            Ok(check) => check,
            Err(_) => {
                tracing::warn!(
                    "Probe '{}' timed out after {}s",
                    probe.name(),
                    self.timeout.as_secs()
                );
                HealthCheck::new(
                    probe.name(),
                    Status::Fail,
                    format!("timed out after {}s", self.timeout.as_secs()),
                )
            }
        }
    }
}
