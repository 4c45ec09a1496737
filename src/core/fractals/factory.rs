use crate::core::actions::generate_fractal::ports::fractal_generator::FractalGenerator;
use crate::core::fractals::burning_ship::generator::BurningShip;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::generator::Julia;
use crate::core::fractals::mandelbrot::generator::Mandelbrot;
use crate::core::fractals::tricorn::generator::Tricorn;

pub type BoxedFractalGenerator = Box<dyn FractalGenerator + Send + Sync>;

pub fn fractal_generator_factory(
    kind: FractalKinds,
    max_iterations: u32,
) -> Result<BoxedFractalGenerator, FractalError> {
    log::debug!(
        "building {} generator with {} max iterations",
        kind,
        max_iterations
    );

    let generator: BoxedFractalGenerator = match kind {
        FractalKinds::Mandelbrot => Box::new(Mandelbrot::new(max_iterations)?),
        FractalKinds::Julia => Box::new(Julia::new(max_iterations)?),
        FractalKinds::Tricorn => Box::new(Tricorn::new(max_iterations)?),
        FractalKinds::BurningShip => Box::new(BurningShip::new(max_iterations)?),
    };

    Ok(generator)
}
