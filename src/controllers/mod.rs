pub mod data;
pub mod ports;
pub mod sweep;
pub mod zoom;
