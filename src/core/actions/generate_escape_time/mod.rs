pub mod errors;
pub mod escape_state;
pub mod generate_escape_time;
pub mod generate_escape_time_rayon;
pub mod ports;
