pub mod errors;
pub mod scoring;
pub mod select_region;
pub mod select_region_brute_force;
pub mod window_size;
