use std::time::Duration;

use crate::domain::entities::report::HealthReport;
use crate::domain::ports::sink::{DeliveryError, ReportSink};

/// POSTs the serialized report as JSON to an HTTP endpoint.
///
/// The payload is the report's wire shape (`overall`, `score`, `maxScore`,
/// `checks`, `timestamp`), so any receiver of the health format can consume
/// it directly.
pub struct WebhookSink {
    url: String,
    client: reqwest::Client,
}

impl WebhookSink {
    /// Creates a sink targeting the given URL.
    ///
    /// The HTTP client is configured with a 5-second timeout covering
    /// DNS resolution, connection, and response.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::ChannelUnavailable` if the HTTP client
    /// cannot be initialized (e.g. TLS backend failure).
    pub fn new(url: impl Into<String>) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                DeliveryError::ChannelUnavailable(format!("cannot build HTTP client: {e}"))
            })?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl ReportSink for WebhookSink {
    fn deliver(&self, report: &HealthReport) -> Result<(), DeliveryError> {
        let result = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current()
                .block_on(self.client.post(&self.url).json(report).send())
        });

        match result {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => Err(DeliveryError::SendFailed(format!(
                "webhook HTTP {}",
                response.status()
            ))),
            Err(e) => Err(DeliveryError::SendFailed(format!("webhook error: {e}"))),
        }
    }
}
