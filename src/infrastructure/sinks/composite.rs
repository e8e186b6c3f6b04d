use crate::domain::entities::report::HealthReport;
use crate::domain::ports::sink::{DeliveryError, ReportSink};

/// Forwards a report to multiple sinks.
///
/// Calls each sink in order, collecting errors. Returns the first error
/// encountered (if any), but always calls all sinks.
pub struct CompositeSink {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl CompositeSink {
    #[must_use]
    pub fn new(sinks: Vec<Box<dyn ReportSink>>) -> Self {
        Self { sinks }
    }
}

impl Default for CompositeSink {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ReportSink for CompositeSink {
    fn deliver(&self, report: &HealthReport) -> Result<(), DeliveryError> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.deliver(report) {
                tracing::warn!("Report delivery failed: {e}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::domain::value_objects::status::Status;

    struct CountingSink {
        calls: Arc<AtomicUsize>,
    }

    impl ReportSink for CountingSink {
        fn deliver(&self, _report: &HealthReport) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingSink;

    impl ReportSink for FailingSink {
        fn deliver(&self, _report: &HealthReport) -> Result<(), DeliveryError> {
            Err(DeliveryError::SendFailed("boom".to_string()))
        }
    }

    fn make_report() -> HealthReport {
        HealthReport {
            overall: Status::Pass,
            score: 0.0,
            max_score: 0.0,
            checks: vec![],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_composite_delivers_ok() {
        let sink = CompositeSink::default();
        assert!(sink.deliver(&make_report()).is_ok());
    }

    #[test]
    fn all_sinks_are_called_even_after_a_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let sink = CompositeSink::new(vec![
            Box::new(FailingSink),
            Box::new(CountingSink {
                calls: Arc::clone(&calls),
            }),
        ]);

        let result = sink.deliver(&make_report());
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn first_error_is_returned() {
        let sink = CompositeSink::new(vec![Box::new(FailingSink), Box::new(FailingSink)]);
        let err = sink.deliver(&make_report()).expect_err("should fail");
        assert!(matches!(err, DeliveryError::SendFailed(_)));
    }
}
