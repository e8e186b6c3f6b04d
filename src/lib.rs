//! vitals — diagnostic probe runner and health report aggregator.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
