use std::borrow::Cow;

use colored::Colorize;

use crate::domain::entities::report::HealthReport;
use crate::domain::ports::sink::{DeliveryError, ReportSink};
use crate::domain::value_objects::status::Status;

const SEPARATOR_WIDTH: usize = 70;

/// Renders a report to stdout: an overall badge with the score, then one
/// line per check with its status icon and any evidence.
pub struct TerminalSink;

impl ReportSink for TerminalSink {
    fn deliver(&self, report: &HealthReport) -> Result<(), DeliveryError> {
        let separator = "\u{2500}".repeat(SEPARATOR_WIDTH);

        println!("\n{}", separator.dimmed());
        println!(
            "{} {}",
            status_badge(report.overall),
            format!("Health check: {:.1}/{:.1}", report.score, report.max_score).bold()
        );
        println!("{}", separator.dimmed());

        for check in &report.checks {
            println!(
                "{} {}: {}",
                check.status.icon(),
                sanitize(&check.name).bold(),
                sanitize(&check.message)
            );
            if let Some(ref evidence) = check.evidence {
                println!("   {}", format!("evidence: {}", sanitize(evidence)).dimmed());
            }
        }

        println!("{}\n", separator.dimmed());
        Ok(())
    }
}

/// Strip ANSI escape sequences and C0/C1 control characters from a string,
/// preserving only printable content, newlines, and tabs.
fn sanitize(s: &str) -> Cow<'_, str> {
    if s.bytes()
        .any(|b| matches!(b, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
    {
        Cow::Owned(
            s.chars()
                .filter(|&c| !matches!(c as u32, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

#[must_use]
fn status_badge(status: Status) -> String {
    match status {
        Status::Fail => format!(" {} {} ", status.icon(), status)
            .on_red()
            .white()
            .bold()
            .to_string(),
        Status::Warn => format!(" {} {} ", status.icon(), status)
            .on_yellow()
            .black()
            .bold()
            .to_string(),
        Status::Skip => format!(" {} {} ", status.icon(), status)
            .on_blue()
            .white()
            .to_string(),
        Status::Pass => format!(" {} {} ", status.icon(), status)
            .on_green()
            .black()
            .to_string(),
    }
}
