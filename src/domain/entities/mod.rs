pub mod check;
pub mod report;

pub use check::HealthCheck;
pub use report::HealthReport;
