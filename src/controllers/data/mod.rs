pub mod execution_mode;
pub mod frame;
