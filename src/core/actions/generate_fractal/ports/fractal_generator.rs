use crate::core::data::viewport::{Viewport, ViewportError};

/// Returned by [`FractalGenerator::num_iterations`] when the orbit stayed
/// bounded for the whole iteration budget.
pub const NO_ESCAPE: i32 = -1;

/// A fractal variant the viewer can display.
///
/// Implementors are immutable strategy values: everything they need is fixed
/// at construction, so one instance can be shared across rendering threads.
pub trait FractalGenerator {
    fn display_name(&self) -> &str;

    /// The canonical starting view for this variant.
    fn initial_range(&self) -> Viewport;

    /// Overwrites `range` with [`FractalGenerator::initial_range`].
    fn get_initial_range(&self, range: &mut Viewport) {
        *range = self.initial_range();
    }

    /// Recentres `range` on `(center_x, center_y)` and scales it by `scale`.
    /// See [`Viewport::recenter_and_zoom`].
    fn recenter_and_zoom_range(
        &self,
        range: &mut Viewport,
        center_x: f64,
        center_y: f64,
        scale: f64,
    ) -> Result<(), ViewportError> {
        range.recenter_and_zoom(center_x, center_y, scale)
    }

    /// Escape-iteration count for the point `x + iy`, or [`NO_ESCAPE`].
    ///
    /// Called once per pixel; must be deterministic and free of side effects.
    fn num_iterations(&self, x: f64, y: f64) -> i32;
}
