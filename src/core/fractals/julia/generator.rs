use crate::core::actions::generate_fractal::ports::fractal_generator::FractalGenerator;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::escape_time::{DEFAULT_MAX_ITERATIONS, escape_time, validate_max_iterations};

pub const DEFAULT_CONSTANT: Complex = Complex {
    real: -0.7,
    imag: 0.27,
};

const INITIAL_RANGE: Viewport = Viewport::new_unchecked(-1.5, -1.5, 3.0, 3.0);

/// `z <- z^2 + c` with `z0` the sampled point and `c` fixed per instance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Julia {
    c: Complex,
    max_iterations: u32,
}

impl Julia {
    /// A Julia set for [`DEFAULT_CONSTANT`].
    pub fn new(max_iterations: u32) -> Result<Self, FractalError> {
        Self::with_constant(DEFAULT_CONSTANT, max_iterations)
    }

    pub fn with_constant(c: Complex, max_iterations: u32) -> Result<Self, FractalError> {
        if !c.real.is_finite() || !c.imag.is_finite() {
            return Err(FractalError::NonFiniteConstant {
                real: c.real,
                imag: c.imag,
            });
        }

        Ok(Self {
            c,
            max_iterations: validate_max_iterations(max_iterations)?,
        })
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.c
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for Julia {
    fn default() -> Self {
        Self {
            c: DEFAULT_CONSTANT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl FractalGenerator for Julia {
    fn display_name(&self) -> &str {
        "Julia"
    }

    fn initial_range(&self) -> Viewport {
        INITIAL_RANGE
    }

    fn num_iterations(&self, x: f64, y: f64) -> i32 {
        let z0 = Complex { real: x, imag: y };

        escape_time(z0, self.c, self.max_iterations, |z, c| z * z + c)
    }
}
