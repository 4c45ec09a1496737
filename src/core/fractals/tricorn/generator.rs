use crate::core::actions::generate_fractal::ports::fractal_generator::FractalGenerator;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::escape_time::{DEFAULT_MAX_ITERATIONS, escape_time, validate_max_iterations};

const INITIAL_RANGE: Viewport = Viewport::new_unchecked(-2.0, -2.0, 4.0, 4.0);

/// The Mandelbar: `z <- conj(z)^2 + c` with `z0 = 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tricorn {
    max_iterations: u32,
}

impl Tricorn {
    pub fn new(max_iterations: u32) -> Result<Self, FractalError> {
        Ok(Self {
            max_iterations: validate_max_iterations(max_iterations)?,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for Tricorn {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl FractalGenerator for Tricorn {
    fn display_name(&self) -> &str {
        "Tricorn"
    }

    fn initial_range(&self) -> Viewport {
        INITIAL_RANGE
    }

    fn num_iterations(&self, x: f64, y: f64) -> i32 {
        let c = Complex { real: x, imag: y };

        escape_time(Complex::ZERO, c, self.max_iterations, |z, c| {
            let z = z.conj();
            z * z + c
        })
    }
}
