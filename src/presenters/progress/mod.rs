pub mod log_progress;
pub mod progress_bar;
