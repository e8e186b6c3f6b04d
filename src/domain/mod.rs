pub mod aggregate;
pub mod entities;
pub mod ports;
pub mod value_objects;
