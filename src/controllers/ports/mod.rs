pub mod frame_sink;
pub mod progress_reporter;
