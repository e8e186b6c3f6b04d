use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::domain::entities::check::HealthCheck;
use crate::domain::ports::probe::Probe;
use crate::domain::value_objects::status::Status;

/// Checks that an HTTP endpoint answers successfully and quickly.
///
/// FAIL on a connection error or non-success status, WARN when the response
/// takes longer than the configured threshold, PASS otherwise. The measured
/// latency is attached as evidence.
pub struct HttpProbe {
    name: String,
    url: String,
    warn_threshold: Duration,
    client: reqwest::Client,
}

impl HttpProbe {
    /// Creates a probe targeting the given URL.
    ///
    /// The HTTP client is configured with a 10-second timeout covering
    /// DNS resolution, connection, and response.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest` error if the HTTP client cannot be initialized
    /// (e.g. TLS backend failure).
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        warn_threshold: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            name: name.into(),
            url: url.into(),
            warn_threshold,
            client,
        })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> HealthCheck {
        let started = Instant::now();
        match self.client.get(&self.url).send().await {
            Ok(response) => {
                let elapsed = started.elapsed();
                let latency = format!("{}ms", elapsed.as_millis());
                if !response.status().is_success() {
                    HealthCheck::new(
                        &self.name,
                        Status::Fail,
                        format!("HTTP {}", response.status()),
                    )
                    .with_evidence(latency)
                } else if elapsed > self.warn_threshold {
                    HealthCheck::new(&self.name, Status::Warn, format!("slow response ({latency})"))
                        .with_evidence(latency)
                } else {
                    HealthCheck::new(&self.name, Status::Pass, format!("reachable in {latency}"))
                        .with_evidence(latency)
                }
            }
            Err(e) => HealthCheck::new(&self.name, Status::Fail, format!("request failed: {e}")),
        }
    }
}
