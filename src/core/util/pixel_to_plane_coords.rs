use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::get_coord::{GetCoordError, get_coord};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelToPlaneCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
    Coord(GetCoordError),
}

impl fmt::Display for PixelToPlaneCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
            Self::Coord(err) => write!(f, "coordinate mapping failed: {}", err),
        }
    }
}

impl Error for PixelToPlaneCoordsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PointOutsideRect { .. } => None,
            Self::Coord(err) => Some(err),
        }
    }
}

impl From<GetCoordError> for PixelToPlaneCoordsError {
    fn from(err: GetCoordError) -> Self {
        Self::Coord(err)
    }
}

/// Converts a pixel inside `pixel_rect` into a point of the plane covered by
/// `viewport`, one [`get_coord`] call per axis.
pub fn pixel_to_plane_coords(
    pixel: Point,
    pixel_rect: PixelRect,
    viewport: Viewport,
) -> Result<Complex, PixelToPlaneCoordsError> {
    if !pixel_rect.contains_point(pixel) {
        return Err(PixelToPlaneCoordsError::PointOutsideRect { point: pixel, pixel_rect });
    }

    let relative_x = (i64::from(pixel.x) - i64::from(pixel_rect.top_left().x)) as u32;
    let relative_y = (i64::from(pixel.y) - i64::from(pixel_rect.top_left().y)) as u32;

    let real = get_coord(viewport.origin_x(), viewport.max_x(), pixel_rect.width(), relative_x)?;
    let imag = get_coord(viewport.origin_y(), viewport.max_y(), pixel_rect.height(), relative_y)?;

    Ok(Complex { real, imag })
}
