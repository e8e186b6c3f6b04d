pub mod probe;
pub mod sink;

pub use probe::Probe;
pub use sink::{DeliveryError, ReportSink};
