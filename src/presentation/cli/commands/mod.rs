pub mod check;
pub mod probes;
