pub mod ports;
pub mod probe;
pub mod target;
