use crate::core::actions::generate_fractal::ports::fractal_generator::NO_ESCAPE;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalError;
use std::ops::ControlFlow;

pub const DEFAULT_MAX_ITERATIONS: u32 = 2000;

/// An orbit has escaped once `|z|^2` exceeds this, i.e. `|z| > 2`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Checks an iteration budget is usable; counts are reported as `i32`.
pub fn validate_max_iterations(max_iterations: u32) -> Result<u32, FractalError> {
    if max_iterations == 0 {
        return Err(FractalError::ZeroMaxIterationsError);
    }

    if max_iterations > i32::MAX as u32 {
        return Err(FractalError::MaxIterationsTooLarge { max_iterations });
    }

    Ok(max_iterations)
}

/// Applies `step(z, c)` starting from `z0` and returns the 1-based step on
/// which `|z|^2` first exceeded [`ESCAPE_RADIUS_SQUARED`], or [`NO_ESCAPE`]
/// if `max_iterations` steps all stayed inside.
///
/// `max_iterations` must already have passed [`validate_max_iterations`].
#[inline]
pub fn escape_time<F>(z0: Complex, c: Complex, max_iterations: u32, step: F) -> i32
where
    F: Fn(Complex, Complex) -> Complex,
{
    let outcome = (1..=max_iterations).try_fold(z0, |z, iteration| {
        let next = step(z, c);

        if next.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration as i32,
        ControlFlow::Continue(_) => NO_ESCAPE,
    }
}
