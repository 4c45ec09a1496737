pub mod burning_ship;
pub mod errors;
pub mod escape_time;
pub mod factory;
pub mod fractal_kinds;
pub mod generator_config;
pub mod julia;
pub mod mandelbrot;
pub mod tricorn;
