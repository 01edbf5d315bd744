// SPDX-License-Identifier: MPL-2.0
//! Interactive viewport model: zoom factor, pan offset, and the crop
//! rectangle derived from both.
//!
//! - [`scale`]: [`ScaleHandler`] and the zoom shortcut multipliers
//! - [`drag`]: [`DragHandler`] accumulating pointer deltas
//! - [`crop`]: [`CropCalculator`] mapping zoom and pan to a source region

pub mod crop;
pub mod drag;
pub mod scale;

pub use crop::{
    CropCalculator, CropGeometry, CropRectangle, DisplayBounds, ImageSize,
    DEFAULT_ZOOM_CURVE_EXPONENT,
};
pub use drag::{DragHandler, DragOffset};
pub use scale::{
    ScaleHandler, ZoomSteps, DEFAULT_SCALE_FACTOR, DEFAULT_ZOOM_IN_MULTIPLIER,
    DEFAULT_ZOOM_OUT_MULTIPLIER,
};
