// SPDX-License-Identifier: MPL-2.0
//! Crop rectangle computation for the zoomed and panned viewport.
//!
//! Given the source image size, the display bounds (the viewport expressed in
//! source pixels when the image is fitted), the zoom factor, and the drag
//! handler, [`CropCalculator::compute`] returns the region of the source image
//! that is visible. When the accumulated drag would move that region past an
//! image edge, the drag handler is rewritten so the stored offset matches the
//! edge exactly and later deltas start from there.

use super::drag::DragHandler;

/// Exponent of the zoom response curve. Values above 1.0 make the first zoom
/// steps gentler than the later ones.
pub const DEFAULT_ZOOM_CURVE_EXPONENT: f64 = 1.4;

/// Size of a source image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The viewport rectangle expressed in source-image pixels for an unzoomed,
/// fitted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBounds {
    pub width: u32,
    pub height: u32,
}

impl DisplayBounds {
    /// Creates bounds, raising zero dimensions to one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Computes the bounds of `image` fitted into a viewport of
    /// `viewport_width` x `viewport_height` display pixels.
    ///
    /// The image is scaled down (or up) by the larger of the two axis ratios,
    /// so the returned bounds always contain the whole image along one axis and
    /// extend past it along the other when aspect ratios differ. A viewport
    /// without area yields the image size itself.
    #[must_use]
    pub fn fitted(image: ImageSize, viewport_width: f32, viewport_height: f32) -> Self {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return Self::new(image.width, image.height);
        }

        let ratio_x = f64::from(image.width) / f64::from(viewport_width);
        let ratio_y = f64::from(image.height) / f64::from(viewport_height);
        let ratio = ratio_x.max(ratio_y);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self::new(
            (f64::from(viewport_width) * ratio) as u32,
            (f64::from(viewport_height) * ratio) as u32,
        )
    }
}

/// Axis-aligned rectangle in source-image pixels, right/bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRectangle {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRectangle {
    /// The rectangle covering all of `image`.
    #[must_use]
    pub const fn full(image: ImageSize) -> Self {
        Self {
            left: 0,
            top: 0,
            right: image.width,
            bottom: image.height,
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Returns whether this rectangle lies inside `image`.
    #[must_use]
    pub fn is_within(&self, image: ImageSize) -> bool {
        self.left <= self.right
            && self.top <= self.bottom
            && self.right <= image.width
            && self.bottom <= image.height
    }
}

/// Inputs describing where the image is displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropGeometry {
    /// Source image size.
    pub image: ImageSize,
    /// Viewport expressed in source pixels (see [`DisplayBounds::fitted`]).
    pub bounds: DisplayBounds,
    /// Viewport width in display pixels.
    pub display_width: f32,
}

/// Computes crop rectangles with a configurable zoom response curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropCalculator {
    zoom_curve_exponent: f64,
}

impl Default for CropCalculator {
    fn default() -> Self {
        Self {
            zoom_curve_exponent: DEFAULT_ZOOM_CURVE_EXPONENT,
        }
    }
}

impl CropCalculator {
    /// Creates a calculator, falling back to the default exponent when the
    /// given one is not a finite positive number.
    #[must_use]
    pub fn new(zoom_curve_exponent: f64) -> Self {
        if zoom_curve_exponent.is_finite() && zoom_curve_exponent > 0.0 {
            Self {
                zoom_curve_exponent,
            }
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn zoom_curve_exponent(&self) -> f64 {
        self.zoom_curve_exponent
    }

    /// Computes the visible region of the source image.
    ///
    /// Rewrites the drag handler's offset on any axis where the pan would
    /// leave the image.
    #[must_use]
    pub fn compute(
        &self,
        geometry: CropGeometry,
        scale_factor: f32,
        drag: &mut DragHandler,
    ) -> CropRectangle {
        let image = geometry.image;
        if scale_factor.is_nan() || scale_factor <= 1.0 || image.width == 0 || image.height == 0
        {
            return CropRectangle::full(image);
        }

        let mut scale = f64::from(scale_factor).powf(self.zoom_curve_exponent);

        let bounds = geometry.bounds;
        let bound_w = visible_extent(bounds.width, scale, image.width);
        let bound_h = visible_extent(bounds.height, scale, image.height);

        if geometry.display_width > 0.0 {
            scale *= f64::from(geometry.display_width) / f64::from(bounds.width.max(1));
        }

        let amount = drag.amount_mut();
        let offset_x = f64::from(amount.x) / scale;
        let offset_y = f64::from(amount.y) / scale;

        let invisible_w = i64::from(image.width) - i64::from(bound_w);
        let centre_x = invisible_w as f64 / 2.0;
        let left = clamp_axis(invisible_w, centre_x, offset_x, scale, &mut amount.x);

        // The vertical centre sits on the whole pixel above the midpoint.
        let invisible_h = i64::from(image.height) - i64::from(bound_h);
        let centre_y = (invisible_h / 2) as f64;
        let top = clamp_axis(invisible_h, centre_y, offset_y, scale, &mut amount.y);

        CropRectangle {
            left,
            top,
            right: left + bound_w,
            bottom: top + bound_h,
        }
    }
}

/// Size of the visible window along one axis, within `1..=image_extent`.
fn visible_extent(bounds_extent: u32, scale: f64, image_extent: u32) -> u32 {
    let extent = round_half_up(f64::from(bounds_extent) / scale);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let extent = extent.clamp(1, i64::from(image_extent)) as u32;
    extent
}

/// Places the window at `centre` shifted by `offset` and keeps it in
/// `0..=invisible`. Rewrites `amount` when the shift had to be clamped.
///
/// The rewritten amount always maps back onto the same edge, so a second
/// call without new drag input returns the same window.
fn clamp_axis(invisible: i64, centre: f64, offset: f64, scale: f64, amount: &mut f32) -> u32 {
    let mut start = round_half_up(centre - offset);
    let lands_at = |amount: f64| round_half_up(centre - amount / scale);
    let boundary_amount = round_half_up(invisible as f64 / 2.0 * scale) as f64;

    if start > invisible {
        start = invisible;
        let mut corrected = -boundary_amount;
        // One display pixel can be less than one source pixel.
        while lands_at(corrected) < invisible {
            corrected -= 1.0;
        }
        #[allow(clippy::cast_possible_truncation)]
        let corrected = corrected as f32;
        *amount = corrected;
    }
    if start < 0 {
        let mut corrected = boundary_amount;
        while lands_at(corrected) > 0 {
            corrected += 1.0;
        }
        #[allow(clippy::cast_possible_truncation)]
        let corrected = corrected as f32;
        *amount = corrected;
        start = 0;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let start = start as u32;
    start
}

/// Rounds half-way values towards positive infinity.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::viewport::drag::DragOffset;

    fn geometry(image: (u32, u32), bounds: (u32, u32), display_width: f32) -> CropGeometry {
        CropGeometry {
            image: ImageSize::new(image.0, image.1),
            bounds: DisplayBounds::new(bounds.0, bounds.1),
            display_width,
        }
    }

    #[test]
    fn unzoomed_returns_full_image_regardless_of_drag() {
        let calc = CropCalculator::default();
        let geo = geometry((1000, 500), (1000, 1000), 800.0);

        for factor in [1.0, 0.8, 0.1] {
            let mut drag = DragHandler::new();
            drag.on_drag(DragOffset::new(345.0, -90.0));
            let rect = calc.compute(geo, factor, &mut drag);
            assert_eq!(rect, CropRectangle::full(geo.image));
            assert_eq!(drag.amount(), DragOffset::new(345.0, -90.0));
        }
    }

    #[test]
    fn centered_crop_matches_reference_example() {
        let calc = CropCalculator::default();
        let geo = geometry((1000, 500), (500, 500), 500.0);
        let mut drag = DragHandler::new();

        let rect = calc.compute(geo, 2.0, &mut drag);

        // 2^1.4 = 2.639..., 500 / 2.639 = 189.47 -> 189
        assert_eq!(rect.width(), 189);
        assert_eq!(rect.height(), 189);
        assert_eq!(
            rect,
            CropRectangle {
                left: 406,
                top: 155,
                right: 595,
                bottom: 344,
            }
        );
        assert_eq!(drag.amount(), DragOffset::ZERO);
    }

    #[test]
    fn visible_window_never_exceeds_image() {
        let calc = CropCalculator::default();
        // Bounds far wider than the image: width is clamped to the image.
        let geo = geometry((100, 800), (2000, 800), 2000.0);
        let mut drag = DragHandler::new();

        let rect = calc.compute(geo, 1.2, &mut drag);
        assert_eq!(rect.left, 0);
        assert_eq!(rect.right, 100);
        assert!(rect.is_within(geo.image));
    }

    #[test]
    fn drag_right_moves_window_left() {
        let calc = CropCalculator::default();
        let geo = geometry((1000, 500), (500, 500), 500.0);
        let mut centered = DragHandler::new();
        let center = calc.compute(geo, 2.0, &mut centered);

        let mut drag = DragHandler::new();
        drag.on_drag(DragOffset::new(100.0, 0.0));
        let rect = calc.compute(geo, 2.0, &mut drag);

        assert!(rect.left < center.left);
        assert_eq!(rect.top, center.top);
        assert_eq!(drag.amount(), DragOffset::new(100.0, 0.0));
    }

    #[test]
    fn overshoot_past_left_edge_rewrites_drag() {
        let calc = CropCalculator::default();
        let geo = geometry((1000, 500), (500, 500), 500.0);
        let mut drag = DragHandler::new();
        drag.on_drag(DragOffset::new(100_000.0, 0.0));

        let rect = calc.compute(geo, 2.0, &mut drag);
        assert_eq!(rect.left, 0);

        // scale = 2^1.4 * (500 / 500); invisible = 811
        let scale = 2f64.powf(1.4);
        #[allow(clippy::cast_possible_truncation)]
        let expected = (811.0 / 2.0 * scale + 0.5).floor() as f32;
        assert_eq!(drag.amount().x, expected);

        let again = calc.compute(geo, 2.0, &mut drag);
        assert_eq!(again.left, 0);
        assert_eq!(again, rect);
    }

    #[test]
    fn overshoot_past_right_edge_rewrites_drag() {
        let calc = CropCalculator::default();
        let geo = geometry((1000, 500), (500, 500), 500.0);
        let mut drag = DragHandler::new();
        drag.on_drag(DragOffset::new(-100_000.0, 0.0));

        let rect = calc.compute(geo, 2.0, &mut drag);
        assert_eq!(rect.right, 1000);
        assert!(drag.amount().x < 0.0);

        let again = calc.compute(geo, 2.0, &mut drag);
        assert_eq!(again.right, 1000);
    }

    #[test]
    fn clamp_holds_when_display_pixel_is_smaller_than_source_pixel() {
        let calc = CropCalculator::default();
        let image = ImageSize::new(3000, 2250);
        let geo = CropGeometry {
            image,
            bounds: DisplayBounds::fitted(image, 600.0, 450.0),
            display_width: 600.0,
        };

        for (dx, dy) in [(100_000.0, 0.0), (-100_000.0, 0.0), (0.0, 100_000.0), (0.0, -100_000.0)] {
            let mut drag = DragHandler::new();
            drag.on_drag(DragOffset::new(dx, dy));

            let first = calc.compute(geo, 1.2, &mut drag);
            let settled = drag.amount();
            let second = calc.compute(geo, 1.2, &mut drag);

            assert_eq!(first, second, "window drifted for drag ({dx}, {dy})");
            assert_eq!(drag.amount(), settled);
            assert!(
                first.left == 0 || first.right == 3000 || first.top == 0 || first.bottom == 2250
            );
        }

        // The plain rounded rewrite (87) would land one pixel off the edge.
        let mut drag = DragHandler::new();
        drag.on_drag(DragOffset::new(100_000.0, 0.0));
        let rect = calc.compute(geo, 1.2, &mut drag);
        assert_eq!(rect.left, 0);
        assert_eq!(rect.right, 2324);
        assert_eq!(drag.amount().x, 88.0);
    }

    #[test]
    fn vertical_centre_uses_whole_pixel_midpoint() {
        let calc = CropCalculator::default();
        // invisible height 311: the window starts at 155, not 155.5 rounded up.
        let geo = geometry((1000, 500), (500, 500), 500.0);
        let mut drag = DragHandler::new();

        let rect = calc.compute(geo, 2.0, &mut drag);
        assert_eq!((rect.top, rect.bottom), (155, 344));

        drag.on_drag(DragOffset::new(0.0, 100_000.0));
        let clamped = calc.compute(geo, 2.0, &mut drag);
        assert_eq!(clamped.top, 0);
        assert_eq!(calc.compute(geo, 2.0, &mut drag), clamped);
    }

    #[test]
    fn drag_after_clamp_moves_away_from_edge_immediately() {
        let calc = CropCalculator::default();
        let geo = geometry((1000, 500), (500, 500), 500.0);
        let mut drag = DragHandler::new();
        drag.on_drag(DragOffset::new(100_000.0, 0.0));
        let _ = calc.compute(geo, 2.0, &mut drag);

        drag.on_drag(DragOffset::new(-50.0, 0.0));
        let rect = calc.compute(geo, 2.0, &mut drag);
        assert!(rect.left > 0);
    }

    #[test]
    fn vertical_overshoot_clamps_top() {
        let calc = CropCalculator::default();
        let geo = geometry((1000, 500), (500, 500), 500.0);
        let mut drag = DragHandler::new();
        drag.on_drag(DragOffset::new(0.0, -9_999.0));

        let rect = calc.compute(geo, 2.0, &mut drag);
        assert_eq!(rect.bottom, 500);
        assert_eq!(rect.top, 500 - 189);
        assert!(drag.amount().y < 0.0);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let calc = CropCalculator::default();
        let geo = geometry((1200, 900), (1600, 900), 800.0);
        let mut drag = DragHandler::new();
        drag.on_drag(DragOffset::new(37.0, -12.0));

        let first = calc.compute(geo, 1.728, &mut drag);
        let amount = drag.amount();
        let second = calc.compute(geo, 1.728, &mut drag);

        assert_eq!(first, second);
        assert_eq!(drag.amount(), amount);
    }

    #[test]
    fn huge_zoom_keeps_non_empty_window() {
        let calc = CropCalculator::default();
        let geo = geometry((64, 64), (64, 64), 64.0);
        let mut drag = DragHandler::new();

        let rect = calc.compute(geo, 1.0e6, &mut drag);
        assert!(rect.left < rect.right);
        assert!(rect.top < rect.bottom);
        assert!(rect.is_within(geo.image));
    }

    #[test]
    fn custom_exponent_changes_window_size() {
        let geo = geometry((1000, 1000), (1000, 1000), 1000.0);
        let linear = CropCalculator::new(1.0);
        let mut drag = DragHandler::new();

        let rect = linear.compute(geo, 2.0, &mut drag);
        assert_eq!(rect.width(), 500);
        assert_eq!(
            rect,
            CropRectangle {
                left: 250,
                top: 250,
                right: 750,
                bottom: 750,
            }
        );
    }

    #[test]
    fn invalid_exponent_falls_back_to_default() {
        assert_eq!(CropCalculator::new(-2.0), CropCalculator::default());
        assert_eq!(CropCalculator::new(f64::INFINITY), CropCalculator::default());
    }

    #[test]
    fn fitted_bounds_cover_viewport_in_image_pixels() {
        // Wide image in a square viewport: width limits the fit.
        let bounds = DisplayBounds::fitted(ImageSize::new(1000, 500), 500.0, 500.0);
        assert_eq!(bounds, DisplayBounds::new(1000, 1000));

        // Tall image in a wide viewport: height limits the fit.
        let bounds = DisplayBounds::fitted(ImageSize::new(300, 600), 800.0, 400.0);
        assert_eq!(bounds, DisplayBounds::new(1200, 600));
    }

    #[test]
    fn fitted_bounds_fall_back_to_image_size_without_viewport() {
        let image = ImageSize::new(640, 480);
        assert_eq!(
            DisplayBounds::fitted(image, 0.0, 300.0),
            DisplayBounds::new(640, 480)
        );
    }
}
