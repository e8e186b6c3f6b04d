use thiserror::Error;

use crate::domain::entities::report::HealthReport;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("failed to deliver report: {0}")]
    SendFailed(String),
    #[error("delivery channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// Outbound boundary for finished reports (terminal, log file, webhook).
pub trait ReportSink: Send + Sync {
    /// Deliver a finished report.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError` if the report cannot be written or the
    /// channel is unavailable.
    fn deliver(&self, report: &HealthReport) -> Result<(), DeliveryError>;
}
