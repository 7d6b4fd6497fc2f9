pub mod burning_ship;
pub mod fn_rule;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbar;
pub mod mandelbrot;
pub mod multibrot;
pub mod ratio_julia;
