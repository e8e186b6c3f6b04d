//! Runner-level coverage: the barrier between impure probes and the pure
//! aggregator, exercised with in-memory probes.

#![allow(clippy::expect_used)]

use std::time::Duration;

use async_trait::async_trait;

use vitals::application::services::runner::ProbeRunner;
use vitals::domain::aggregate::Aggregator;
use vitals::domain::entities::check::HealthCheck;
use vitals::domain::ports::probe::Probe;
use vitals::domain::value_objects::status::Status;

struct SubsystemProbe {
    name: &'static str,
    status: Status,
    message: &'static str,
    delay: Duration,
}

#[async_trait]
impl Probe for SubsystemProbe {
    fn name(&self) -> &str {
        self.name
    }

    async fn run(&self) -> HealthCheck {
        tokio::time::sleep(self.delay).await;
        HealthCheck::new(self.name, self.status, self.message)
    }
}

fn probe(name: &'static str, status: Status, message: &'static str) -> Box<dyn Probe> {
    Box::new(SubsystemProbe {
        name,
        status,
        message,
        delay: Duration::ZERO,
    })
}

#[tokio::test]
async fn heterogeneous_probes_aggregate_uniformly() {
    let probes: Vec<Box<dyn Probe>> = vec![
        probe("db", Status::Pass, ""),
        probe("sms-gateway", Status::Warn, "slow response"),
        probe("email-queue", Status::Fail, "connection refused"),
    ];
    let aggregator = Aggregator::default();
    let runner = ProbeRunner::new(&probes, Duration::from_secs(1), &aggregator);

    let report = runner.run_once().await.expect("aggregate");
    assert_eq!(report.overall, Status::Fail);
    assert_eq!(report.checks.len(), 3);
    let names: Vec<&str> = report.checks.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["db", "sms-gateway", "email-queue"]);
}

#[tokio::test]
async fn slow_probes_do_not_reorder_the_run() {
    let probes: Vec<Box<dyn Probe>> = vec![
        Box::new(SubsystemProbe {
            name: "slow",
            status: Status::Pass,
            message: "",
            delay: Duration::from_millis(60),
        }),
        Box::new(SubsystemProbe {
            name: "medium",
            status: Status::Pass,
            message: "",
            delay: Duration::from_millis(30),
        }),
        probe("instant", Status::Pass, ""),
    ];
    let aggregator = Aggregator::default();
    let runner = ProbeRunner::new(&probes, Duration::from_secs(1), &aggregator);

    let report = runner.run_once().await.expect("aggregate");
    let names: Vec<&str> = report.checks.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["slow", "medium", "instant"]);
}

#[tokio::test]
async fn hung_probe_is_translated_into_a_fail_entry_not_dropped() {
    let probes: Vec<Box<dyn Probe>> = vec![
        probe("db", Status::Pass, ""),
        Box::new(SubsystemProbe {
            name: "hung",
            status: Status::Pass,
            message: "",
            delay: Duration::from_secs(10),
        }),
    ];
    let aggregator = Aggregator::default();
    let runner = ProbeRunner::new(&probes, Duration::from_millis(50), &aggregator);

    let report = runner.run_once().await.expect("aggregate");
    // The hung probe still occupies its slot: max_score accounting is intact.
    assert_eq!(report.checks.len(), 2);
    assert!((report.max_score - 2.0).abs() < f64::EPSILON);
    assert_eq!(report.checks[1].name, "hung");
    assert_eq!(report.checks[1].status, Status::Fail);
    assert!(report.checks[1].message.contains("timed out"));
    assert_eq!(report.overall, Status::Fail);
}

#[tokio::test]
async fn skipped_subsystem_still_counts_toward_max_score() {
    let probes: Vec<Box<dyn Probe>> = vec![
        probe("db", Status::Pass, ""),
        probe("cache", Status::Skip, "not configured in this environment"),
    ];
    let aggregator = Aggregator::default();
    let runner = ProbeRunner::new(&probes, Duration::from_secs(1), &aggregator);

    let report = runner.run_once().await.expect("aggregate");
    assert_eq!(report.overall, Status::Skip);
    assert!((report.max_score - 2.0).abs() < f64::EPSILON);
    assert!((report.score - 1.0).abs() < f64::EPSILON);
}
