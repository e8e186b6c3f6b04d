use crate::application::services::runner::ProbeRunner;
use crate::domain::entities::report::HealthReport;
use crate::domain::ports::sink::ReportSink;

/// Runs a one-shot health check: execute all probes, aggregate, deliver.
///
/// With `--json` the serialized report is printed to stdout instead of going
/// through the delivery sinks. The finished report is returned so the caller
/// can map the overall status to a process exit code.
///
/// # Errors
///
/// Returns an error if the collected checks violate the probe contract or
/// JSON serialization fails.
pub async fn run_check(
    runner: &ProbeRunner<'_>,
    sink: &dyn ReportSink,
    json: bool,
) -> anyhow::Result<HealthReport> {
    let report = runner.run_once().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Err(e) = sink.deliver(&report) {
        tracing::warn!("Report delivery failed: {e}");
    }

    Ok(report)
}
