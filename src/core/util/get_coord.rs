use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GetCoordError {
    ZeroSize,
    CoordOutOfRange { coord: u32, size: u32 },
}

impl fmt::Display for GetCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "pixel extent must be greater than zero"),
            Self::CoordOutOfRange { coord, size } => {
                write!(f, "pixel coordinate {} is outside the extent 0..{}", coord, size)
            }
        }
    }
}

impl Error for GetCoordError {}

/// Maps pixel index `coord` of a dimension `size` pixels long onto the
/// range `range_min..range_max`.
///
/// The range is not required to be ordered, so passing `range_max < range_min`
/// flips the axis. Index `0` maps exactly onto `range_min`; the last index
/// stops one pixel step short of `range_max`.
#[inline]
pub fn get_coord(range_min: f64, range_max: f64, size: u32, coord: u32) -> Result<f64, GetCoordError> {
    if size == 0 {
        return Err(GetCoordError::ZeroSize);
    }

    if coord >= size {
        return Err(GetCoordError::CoordOutOfRange { coord, size });
    }

    let range = range_max - range_min;
    Ok(range_min + range * (f64::from(coord) / f64::from(size)))
}
