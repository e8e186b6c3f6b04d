pub mod probes;
pub mod sinks;
