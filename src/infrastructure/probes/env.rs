use async_trait::async_trait;

use crate::domain::entities::check::HealthCheck;
use crate::domain::ports::probe::Probe;
use crate::domain::value_objects::status::Status;

/// Checks that a required environment variable is set and non-empty.
///
/// A missing variable is SKIP, not FAIL: the subsystem is simply not
/// configured in this environment, and the probe must still appear in the
/// run rather than omit itself. The value itself is never recorded as
/// evidence (it may be a credential); only its length is.
pub struct EnvVarProbe {
    name: String,
    var: String,
}

impl EnvVarProbe {
    #[must_use]
    pub fn new(name: impl Into<String>, var: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            var: var.into(),
        }
    }
}

#[async_trait]
impl Probe for EnvVarProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> HealthCheck {
        match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => {
                HealthCheck::new(&self.name, Status::Pass, format!("{} is set", self.var))
                    .with_evidence(format!("{} chars", value.len()))
            }
            _ => HealthCheck::new(
                &self.name,
                Status::Skip,
                "not configured in this environment",
            ),
        }
    }
}
