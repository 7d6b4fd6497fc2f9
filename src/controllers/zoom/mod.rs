pub mod errors;
pub mod zoom_config;
pub mod zoom_controller;
