use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::check::HealthCheck;
use crate::domain::value_objects::status::Status;

/// Aggregated snapshot of one probe run.
///
/// `overall` is always derived from `checks`, never set independently, and
/// `checks` keeps the run order exactly as supplied. The timestamp marks the
/// instant the report was assembled, not when any individual probe ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub overall: Status,
    pub score: f64,
    pub max_score: f64,
    pub checks: Vec<HealthCheck>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn make_report() -> HealthReport {
        HealthReport {
            overall: Status::Warn,
            score: 1.5,
            max_score: 2.0,
            checks: vec![
                HealthCheck::new("db", Status::Pass, "reachable"),
                HealthCheck::new("sms-gateway", Status::Warn, "slow response"),
            ],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn serde_roundtrip() {
        let report = make_report();
        let json = serde_json::to_string(&report).expect("serialize");
        let deserialized: HealthReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(report, deserialized);
    }

    #[test]
    fn wire_shape_uses_camel_case_max_score() {
        let json = serde_json::to_string(&make_report()).expect("serialize");
        assert!(json.contains("\"maxScore\":2.0"));
        assert!(!json.contains("max_score"));
    }

    #[test]
    fn timestamp_round_trips_as_iso8601() {
        let report = make_report();
        let json = serde_json::to_value(&report).expect("serialize");
        let raw = json["timestamp"].as_str().expect("timestamp string");
        let parsed: DateTime<Utc> = raw.parse().expect("valid ISO-8601");
        assert_eq!(parsed, report.timestamp);
    }
}
