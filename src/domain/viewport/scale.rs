// SPDX-License-Identifier: MPL-2.0
//! Zoom factor tracking for the image viewport.
//!
//! The factor is a plain multiplier: 1.0 shows the whole image fitted to the
//! viewport, values above 1.0 zoom in. No bounds are enforced here; the crop
//! computation is what keeps the visible window inside the image.

/// Default zoom factor (whole image visible).
pub const DEFAULT_SCALE_FACTOR: f32 = 1.0;

/// Multiplier applied by the zoom-in shortcut.
pub const DEFAULT_ZOOM_IN_MULTIPLIER: f32 = 1.2;

/// Multiplier applied by the zoom-out shortcut.
pub const DEFAULT_ZOOM_OUT_MULTIPLIER: f32 = 0.8;

/// Tracks the current zoom factor of a viewing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleHandler {
    factor: f32,
}

impl Default for ScaleHandler {
    fn default() -> Self {
        Self {
            factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl ScaleHandler {
    /// Creates a handler at the default factor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiplies the current factor by `multiplier`.
    pub fn on_scale(&mut self, multiplier: f32) {
        self.factor *= multiplier;
    }

    /// Restores the default factor.
    pub fn reset_factor(&mut self) {
        self.factor = DEFAULT_SCALE_FACTOR;
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Returns whether the viewport currently shows a cropped region.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.factor > DEFAULT_SCALE_FACTOR
    }
}

/// Multipliers used by the zoom shortcuts, guaranteed to be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSteps {
    zoom_in: f32,
    zoom_out: f32,
}

impl ZoomSteps {
    /// Creates zoom steps, falling back to the defaults for any multiplier
    /// that is not a finite positive number.
    #[must_use]
    pub fn new(zoom_in: f32, zoom_out: f32) -> Self {
        Self {
            zoom_in: positive_or(zoom_in, DEFAULT_ZOOM_IN_MULTIPLIER),
            zoom_out: positive_or(zoom_out, DEFAULT_ZOOM_OUT_MULTIPLIER),
        }
    }

    #[must_use]
    pub fn zoom_in(self) -> f32 {
        self.zoom_in
    }

    #[must_use]
    pub fn zoom_out(self) -> f32 {
        self.zoom_out
    }
}

impl Default for ZoomSteps {
    fn default() -> Self {
        Self {
            zoom_in: DEFAULT_ZOOM_IN_MULTIPLIER,
            zoom_out: DEFAULT_ZOOM_OUT_MULTIPLIER,
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
