use rayon::prelude::*;
use std::time::Instant;

use crate::core::actions::generate_fractal::ports::fractal_generator::FractalGenerator;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_plane_coords::{PixelToPlaneCoordsError, pixel_to_plane_coords};

/// Generates a frame in parallel using rayon's work-stealing scheduler.
///
/// Rows are distributed across the pool; each worker reads the same
/// `viewport` snapshot and shares `generator` by reference. The output is in
/// row-major order and identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<G>(
    pixel_rect: PixelRect,
    viewport: Viewport,
    generator: &G,
) -> Result<Vec<i32>, PixelToPlaneCoordsError>
where
    G: FractalGenerator + Sync + ?Sized,
{
    let start = Instant::now();
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<i32>>, PixelToPlaneCoordsError> =
        (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
            .into_par_iter()
            .map(|y| -> Result<Vec<i32>, PixelToPlaneCoordsError> {
                let mut row = Vec::with_capacity(row_width);

                for x in x_start..=x_end {
                    let point = pixel_to_plane_coords(Point { x, y }, pixel_rect, viewport)?;
                    row.push(generator.num_iterations(point.real, point.imag));
                }

                Ok(row)
            })
            .collect();

    let frame: Vec<i32> = rows?.into_iter().flatten().collect();

    log::debug!(
        "generated {}x{} {} frame in {:?}",
        pixel_rect.width(),
        pixel_rect.height(),
        generator.display_name(),
        start.elapsed()
    );

    Ok(frame)
}
