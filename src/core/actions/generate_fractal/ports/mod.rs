pub mod fractal_generator;
