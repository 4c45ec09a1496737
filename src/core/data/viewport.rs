use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
    NonFiniteOrigin { x: f64, y: f64 },
    NonPositiveScale { scale: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "viewport size must be positive and finite: {}x{}",
                    width, height
                )
            }
            Self::NonFiniteOrigin { x, y } => {
                write!(f, "viewport origin must be finite: ({}, {})", x, y)
            }
            Self::NonPositiveScale { scale } => {
                write!(f, "zoom scale must be positive and finite: {}", scale)
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the plane currently mapped onto the pixel grid.
///
/// `origin` is the corner with the smallest coordinates; the rectangle spans
/// `origin_x..origin_x + width` and `origin_y..origin_y + height`. The size is
/// always positive and finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin_x: f64,
    origin_y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Result<Self, ViewportError> {
        validate_size(width, height)?;

        if !origin_x.is_finite() || !origin_y.is_finite() {
            return Err(ViewportError::NonFiniteOrigin {
                x: origin_x,
                y: origin_y,
            });
        }

        Ok(Self {
            origin_x,
            origin_y,
            width,
            height,
        })
    }

    /// For compile-time constants whose size is known to be positive.
    pub(crate) const fn new_unchecked(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    #[must_use]
    pub fn origin_y(&self) -> f64 {
        self.origin_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin_x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin_y + self.height
    }

    /// Recentres the viewport on `(center_x, center_y)` and multiplies both
    /// dimensions by `scale`.
    ///
    /// `scale < 1.0` zooms in, `scale > 1.0` zooms out and `1.0` only pans.
    /// On error the viewport is left unchanged.
    pub fn recenter_and_zoom(
        &mut self,
        center_x: f64,
        center_y: f64,
        scale: f64,
    ) -> Result<(), ViewportError> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ViewportError::NonPositiveScale { scale });
        }

        let new_width = self.width * scale;
        let new_height = self.height * scale;
        validate_size(new_width, new_height)?;

        let origin_x = center_x - new_width / 2.0;
        let origin_y = center_y - new_height / 2.0;
        if !origin_x.is_finite() || !origin_y.is_finite() {
            return Err(ViewportError::NonFiniteOrigin {
                x: origin_x,
                y: origin_y,
            });
        }

        log::debug!(
            "recentering viewport on ({}, {}) with scale {}: {}x{} -> {}x{}",
            center_x,
            center_y,
            scale,
            self.width,
            self.height,
            new_width,
            new_height
        );

        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self.width = new_width;
        self.height = new_height;

        Ok(())
    }
}

fn validate_size(width: f64, height: f64) -> Result<(), ViewportError> {
    // `!(x > 0.0)` also catches NaN
    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Err(ViewportError::InvalidSize { width, height });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.0, -1.5, 3.0, 3.0).unwrap();

        assert_eq!(viewport.origin_x(), -2.0);
        assert_eq!(viewport.origin_y(), -1.5);
        assert_eq!(viewport.width(), 3.0);
        assert_eq!(viewport.height(), 3.0);
        assert_eq!(viewport.max_x(), 1.0);
        assert_eq!(viewport.max_y(), 1.5);
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0, 1.0),
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, -1.0),
            Err(ViewportError::InvalidSize {
                width: 1.0,
                height: -1.0
            })
        );
        assert!(matches!(
            Viewport::new(0.0, 0.0, f64::NAN, 1.0),
            Err(ViewportError::InvalidSize { .. })
        ));
        assert!(matches!(
            Viewport::new(0.0, 0.0, f64::INFINITY, 1.0),
            Err(ViewportError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_viewport_origin_must_be_finite() {
        assert!(matches!(
            Viewport::new(f64::NEG_INFINITY, 0.0, 1.0, 1.0),
            Err(ViewportError::NonFiniteOrigin { .. })
        ));
    }

    #[test]
    fn test_zoom_in_around_origin() {
        let mut viewport = Viewport::new(-2.0, -1.0, 4.0, 2.0).unwrap();

        viewport.recenter_and_zoom(0.0, 0.0, 0.5).unwrap();

        assert_eq!(viewport, Viewport::new(-1.0, -0.5, 2.0, 1.0).unwrap());
    }

    #[test]
    fn test_unit_scale_only_recenters() {
        let mut viewport = Viewport::new(-2.0, -1.5, 3.0, 3.0).unwrap();

        viewport.recenter_and_zoom(0.25, -0.75, 1.0).unwrap();

        assert_eq!(viewport.width(), 3.0);
        assert_eq!(viewport.height(), 3.0);
        assert_eq!(viewport.origin_x(), 0.25 - 3.0 / 2.0);
        assert_eq!(viewport.origin_y(), -0.75 - 3.0 / 2.0);
    }

    #[test]
    fn test_zoom_out_grows_viewport() {
        let mut viewport = Viewport::new(0.0, 0.0, 1.0, 2.0).unwrap();

        viewport.recenter_and_zoom(1.0, 1.0, 4.0).unwrap();

        assert_eq!(viewport, Viewport::new(-1.0, -3.0, 4.0, 8.0).unwrap());
    }

    #[test]
    fn test_consecutive_zooms_compose() {
        let mut twice = Viewport::new(-2.0, -1.5, 3.0, 3.0).unwrap();
        let mut once = twice;

        twice.recenter_and_zoom(-0.75, 0.1, 0.3).unwrap();
        twice.recenter_and_zoom(-0.75, 0.1, 0.7).unwrap();
        once.recenter_and_zoom(-0.75, 0.1, 0.3 * 0.7).unwrap();

        assert!((twice.width() - once.width()).abs() < EPSILON);
        assert!((twice.height() - once.height()).abs() < EPSILON);
        assert!((twice.origin_x() - once.origin_x()).abs() < EPSILON);
        assert!((twice.origin_y() - once.origin_y()).abs() < EPSILON);
    }

    #[test]
    fn test_non_positive_scale_is_rejected_without_mutation() {
        let original = Viewport::new(-2.0, -1.0, 4.0, 2.0).unwrap();

        for scale in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let mut viewport = original;
            let result = viewport.recenter_and_zoom(0.0, 0.0, scale);

            assert!(matches!(
                result,
                Err(ViewportError::NonPositiveScale { .. })
            ));
            assert_eq!(viewport, original);
        }
    }

    #[test]
    fn test_zoom_that_underflows_size_is_rejected() {
        let mut viewport = Viewport::new(0.0, 0.0, 1e-300, 1e-300).unwrap();
        let original = viewport;

        let result = viewport.recenter_and_zoom(0.0, 0.0, 1e-300);

        assert!(matches!(result, Err(ViewportError::InvalidSize { .. })));
        assert_eq!(viewport, original);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ViewportError::NonPositiveScale { scale: -1.0 }.to_string(),
            "zoom scale must be positive and finite: -1"
        );
    }
}
