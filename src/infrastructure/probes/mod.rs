pub mod disk;
pub mod env;
pub mod http;
