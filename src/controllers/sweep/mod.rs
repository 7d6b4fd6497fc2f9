pub mod sweep_config;
pub mod sweep_controller;
