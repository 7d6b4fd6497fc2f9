pub mod cancellation;
pub mod generate_escape_time;
pub mod select_region;
