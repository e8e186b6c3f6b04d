pub mod scoring;
pub mod status;

pub use scoring::ScoringWeights;
pub use status::Status;
