use crate::core::data::viewport::Viewport;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::escape_time::DEFAULT_MAX_ITERATIONS;
use crate::core::fractals::factory::{BoxedFractalGenerator, fractal_generator_factory};
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Which variant to run and with what iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub kind: FractalKinds,
    pub max_iterations: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: FractalKinds::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl GeneratorConfig {
    pub fn build(&self) -> Result<BoxedFractalGenerator, FractalError> {
        fractal_generator_factory(self.kind, self.max_iterations)
    }

    /// Builds the configured generator and resets `viewport` to its starting
    /// view, as happens when the user switches variant.
    pub fn reset_view(&self, viewport: &mut Viewport) -> Result<BoxedFractalGenerator, FractalError> {
        let generator = self.build()?;
        generator.get_initial_range(viewport);

        log::debug!("reset view for {}: {:?}", self.kind, viewport);

        Ok(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_mandelbrot() {
        let generator = GeneratorConfig::default().build().unwrap();

        assert_eq!(generator.display_name(), "Mandelbrot");
    }

    #[test]
    fn reset_view_overwrites_viewport() {
        let config = GeneratorConfig {
            kind: FractalKinds::BurningShip,
            max_iterations: 100,
        };
        let mut viewport = Viewport::new(0.3, 0.3, 0.01, 0.01).unwrap();

        let generator = config.reset_view(&mut viewport).unwrap();

        assert_eq!(viewport, generator.initial_range());
        assert_eq!(viewport, Viewport::new(-2.0, -2.5, 4.0, 4.0).unwrap());
    }

    #[test]
    fn reset_view_leaves_viewport_alone_on_error() {
        let config = GeneratorConfig {
            kind: FractalKinds::Julia,
            max_iterations: 0,
        };
        let original = Viewport::new(0.3, 0.3, 0.01, 0.01).unwrap();
        let mut viewport = original;

        let result = config.reset_view(&mut viewport);

        assert!(matches!(result, Err(FractalError::ZeroMaxIterationsError)));
        assert_eq!(viewport, original);
    }
}
