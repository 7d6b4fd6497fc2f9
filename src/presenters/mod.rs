pub mod file;
pub mod progress;
