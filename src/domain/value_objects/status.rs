use serde::{Deserialize, Serialize};

/// Outcome severity of a single health check.
///
/// The four variants form a closed set, totally ordered by badness:
/// `Pass < Skip < Warn < Fail`. Comparisons always use this order,
/// never the lexical order of the serialized names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Skip,
    Warn,
    Fail,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Skip => write!(f, "SKIP"),
            Self::Warn => write!(f, "WARN"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

impl Status {
    /// All statuses, from best to worst.
    pub const ALL: [Self; 4] = [Self::Pass, Self::Skip, Self::Warn, Self::Fail];

    #[must_use]
    pub const fn icon(&self) -> &str {
        match self {
            Self::Pass => "\u{2705}",
            Self::Skip => "\u{23ed}\u{fe0f}",
            Self::Warn => "\u{26a0}\u{fe0f}",
            Self::Fail => "\u{274c}",
        }
    }

    /// True only for a hard failure. SKIP is informational, not a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(Status::Pass.to_string(), "PASS");
        assert_eq!(Status::Skip.to_string(), "SKIP");
        assert_eq!(Status::Warn.to_string(), "WARN");
        assert_eq!(Status::Fail.to_string(), "FAIL");
    }

    #[test]
    fn ordering_by_badness() {
        assert!(Status::Pass < Status::Skip);
        assert!(Status::Skip < Status::Warn);
        assert!(Status::Warn < Status::Fail);
    }

    #[test]
    fn ordering_is_not_lexical() {
        // Lexically "FAIL" < "SKIP", but FAIL is the worst status.
        assert!(Status::Fail > Status::Skip);
    }

    #[test]
    fn only_fail_is_a_failure() {
        assert!(Status::Fail.is_failure());
        assert!(!Status::Pass.is_failure());
        assert!(!Status::Skip.is_failure());
        assert!(!Status::Warn.is_failure());
    }

    #[test]
    fn icon_returns_non_empty() {
        for status in Status::ALL {
            assert!(!status.icon().is_empty());
        }
    }

    #[test]
    fn serde_uses_uppercase_names() {
        assert_eq!(
            serde_json::to_string(&Status::Pass).expect("serialize"),
            "\"PASS\""
        );
        assert_eq!(
            serde_json::to_string(&Status::Fail).expect("serialize"),
            "\"FAIL\""
        );
    }

    #[test]
    fn serde_roundtrip() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).expect("serialize");
            let deserialized: Status = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(status, deserialized);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<Status, _> = serde_json::from_str("\"CRITICAL\"");
        assert!(result.is_err());
    }
}
