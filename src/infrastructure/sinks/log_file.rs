use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::domain::entities::report::HealthReport;
use crate::domain::ports::sink::{DeliveryError, ReportSink};

/// Appends one JSON line per report to a file, suitable for later ingestion
/// by log tooling.
pub struct LogFileSink {
    path: PathBuf,
}

impl LogFileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for LogFileSink {
    fn deliver(&self, report: &HealthReport) -> Result<(), DeliveryError> {
        let line = serde_json::to_string(report)
            .map_err(|e| DeliveryError::SendFailed(format!("serialize report: {e}")))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                DeliveryError::ChannelUnavailable(format!("open {}: {e}", self.path.display()))
            })?;

        writeln!(file, "{line}").map_err(|e| DeliveryError::SendFailed(e.to_string()))?;
        Ok(())
    }
}
