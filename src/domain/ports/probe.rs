use async_trait::async_trait;

use crate::domain::entities::check::HealthCheck;

/// Contract every diagnostic probe satisfies.
///
/// A probe tests exactly one subsystem and always resolves to a terminal
/// [`HealthCheck`]; it never returns an error. A subsystem being broken is
/// ordinary data (a FAIL check), and a probe that cannot determine an
/// outcome in the current environment reports SKIP rather than omitting
/// itself — a missing entry would corrupt the run's maximum score.
///
/// Any value satisfying this contract is acceptable to the aggregator
/// regardless of which subsystem produced it; heterogeneous probes are
/// aggregated uniformly.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Name of this probe, unique within a run; becomes the check's name.
    fn name(&self) -> &str;

    /// Run the diagnostic to completion and produce its terminal result.
    /// May suspend while awaiting a network or storage response.
    async fn run(&self) -> HealthCheck;
}
