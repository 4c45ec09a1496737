use crate::core::actions::generate_fractal::ports::fractal_generator::FractalGenerator;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_plane_coords::{PixelToPlaneCoordsError, pixel_to_plane_coords};

/// Evaluates `generator` for every pixel of `pixel_rect`, row by row.
///
/// `viewport` is taken by value: the whole frame is computed against that
/// snapshot. Sentinel counts are returned as produced.
pub fn generate_fractal_serial<G>(
    pixel_rect: PixelRect,
    viewport: Viewport,
    generator: &G,
) -> Result<Vec<i32>, PixelToPlaneCoordsError>
where
    G: FractalGenerator + ?Sized,
{
    (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .flat_map(|y| {
            (pixel_rect.top_left().x..=pixel_rect.bottom_right().x).map(move |x| Point { x, y })
        })
        .map(|pixel| -> Result<i32, PixelToPlaneCoordsError> {
            let point = pixel_to_plane_coords(pixel, pixel_rect, viewport)?;
            Ok(generator.num_iterations(point.real, point.imag))
        })
        .collect()
}
