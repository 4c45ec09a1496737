mod core;

pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_generator::{FractalGenerator, NO_ESCAPE};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::burning_ship::generator::BurningShip;
pub use crate::core::fractals::errors::FractalError;
pub use crate::core::fractals::escape_time::{DEFAULT_MAX_ITERATIONS, ESCAPE_RADIUS_SQUARED};
pub use crate::core::fractals::factory::{BoxedFractalGenerator, fractal_generator_factory};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::generator_config::GeneratorConfig;
pub use crate::core::fractals::julia::generator::{DEFAULT_CONSTANT as DEFAULT_JULIA_CONSTANT, Julia};
pub use crate::core::fractals::mandelbrot::generator::Mandelbrot;
pub use crate::core::fractals::tricorn::generator::Tricorn;
pub use crate::core::util::get_coord::{GetCoordError, get_coord};
pub use crate::core::util::pixel_to_plane_coords::{PixelToPlaneCoordsError, pixel_to_plane_coords};
