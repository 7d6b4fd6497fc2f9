pub mod bounds;
pub mod colour;
pub mod escape_time;
pub mod grid;
pub mod pixel_buffer;
pub mod plane;
pub mod region;
pub mod rule_params;
