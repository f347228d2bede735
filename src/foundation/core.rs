use crate::foundation::error::{PlotlineError, PlotlineResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Visible world-space window of the graph.
///
/// Produced and mutated by the shell (pan/zoom); the engine consumes it
/// read-only per call. Both axes are strictly ordered.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewPort {
    /// Left world-x bound (inclusive).
    pub x_min: f64,
    /// Right world-x bound (inclusive).
    pub x_max: f64,
    /// Bottom world-y bound.
    pub y_min: f64,
    /// Top world-y bound.
    pub y_max: f64,
}

impl ViewPort {
    /// Build a viewport, rejecting degenerate or unordered bounds.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PlotlineResult<Self> {
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return Err(PlotlineError::validation("ViewPort bounds must be finite"));
        }
        if x_min >= x_max {
            return Err(PlotlineError::validation("ViewPort x_min must be < x_max"));
        }
        if y_min >= y_max {
            return Err(PlotlineError::validation("ViewPort y_min must be < y_max"));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Horizontal extent of the window.
    pub fn x_span(self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent of the window.
    pub fn y_span(self) -> f64 {
        self.y_max - self.y_min
    }

    /// World-x of pixel column `px` on a canvas `pixel_width` columns wide.
    ///
    /// Column `0` maps to exactly `x_min` and column `pixel_width` to
    /// exactly `x_max`; interior columns never leave the window (the
    /// naive `x_min + t * span` form can overshoot `x_max` by an ulp).
    pub fn x_at(self, px: u32, pixel_width: u32) -> f64 {
        debug_assert!(pixel_width > 0);
        if px >= pixel_width {
            return self.x_max;
        }
        self.x_min + (f64::from(px) / f64::from(pixel_width)) * self.x_span()
    }

    /// Affine map from world space to a `width` x `height` pixel canvas.
    ///
    /// World `(x_min, y_max)` lands at the canvas origin (top-left); y is
    /// flipped so larger world-y is higher on screen.
    pub fn screen_transform(self, width: u32, height: u32) -> Affine {
        let sx = f64::from(width) / self.x_span();
        let sy = f64::from(height) / self.y_span();
        Affine::scale_non_uniform(sx, -sy)
            * Affine::translate(Vec2::new(-self.x_min, -self.y_max))
    }

    /// The window as a [`Rect`] (world space).
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }
}
