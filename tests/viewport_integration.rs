// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of the zoom, drag and crop pipeline over many inputs.

use approx::assert_abs_diff_eq;
use photo_viewer::domain::viewport::{
    CropCalculator, CropGeometry, CropRectangle, DisplayBounds, DragHandler, DragOffset,
    ImageSize, ScaleHandler, ZoomSteps,
};

const IMAGES: [(u32, u32); 5] = [(1000, 500), (500, 1000), (1, 1), (4000, 3000), (37, 911)];
const VIEWPORTS: [(f32, f32); 3] = [(800.0, 606.0), (320.0, 240.0), (1920.0, 1036.0)];
const DRAGS: [(f32, f32); 5] = [
    (0.0, 0.0),
    (25.0, -13.0),
    (-500.0, 500.0),
    (100_000.0, 0.0),
    (0.0, -100_000.0),
];

fn geometry(image: (u32, u32), viewport: (f32, f32)) -> CropGeometry {
    let image = ImageSize::new(image.0, image.1);
    CropGeometry {
        image,
        bounds: DisplayBounds::fitted(image, viewport.0, viewport.1),
        display_width: viewport.0,
    }
}

#[test]
fn crop_always_lies_inside_image_and_is_not_empty() {
    let calc = CropCalculator::default();

    for image in IMAGES {
        for viewport in VIEWPORTS {
            let geo = geometry(image, viewport);
            for factor in [1.0_f32, 1.2, 1.44, 2.0, 7.5, 50.0] {
                for (dx, dy) in DRAGS {
                    let mut drag = DragHandler::new();
                    drag.on_drag(DragOffset::new(dx, dy));

                    let rect = calc.compute(geo, factor, &mut drag);

                    assert!(rect.is_within(geo.image), "{rect:?} outside {image:?}");
                    assert!(rect.width() >= 1 && rect.height() >= 1);
                }
            }
        }
    }
}

#[test]
fn clamped_drag_is_a_fixed_point() {
    let calc = CropCalculator::default();

    for image in IMAGES {
        for viewport in VIEWPORTS {
            let geo = geometry(image, viewport);
            for factor in [1.2_f32, 1.44, 1.728, 3.0] {
                for (dx, dy) in DRAGS {
                    let mut drag = DragHandler::new();
                    drag.on_drag(DragOffset::new(dx, dy));

                    let first = calc.compute(geo, factor, &mut drag);
                    let settled = drag.amount();
                    let second = calc.compute(geo, factor, &mut drag);

                    assert_eq!(first, second, "{image:?} in {viewport:?} at {factor}");
                    assert_eq!(drag.amount(), settled);
                }
            }
        }
    }
}

#[test]
fn overshoot_stays_flush_for_large_photo_at_small_zoom() {
    let calc = CropCalculator::default();
    let geo = geometry((4000, 3000), (800.0, 606.0));

    for factor in [1.2_f32, 1.44, 1.728] {
        let mut drag = DragHandler::new();
        drag.on_drag(DragOffset::new(100_000.0, -100_000.0));
        let _ = calc.compute(geo, factor, &mut drag);

        let settled = calc.compute(geo, factor, &mut drag);
        assert_eq!(settled.left, 0, "left edge at {factor}");
        assert_eq!(settled.bottom, 3000, "bottom edge at {factor}");

        let mut drag = DragHandler::new();
        drag.on_drag(DragOffset::new(-100_000.0, 100_000.0));
        let _ = calc.compute(geo, factor, &mut drag);

        let settled = calc.compute(geo, factor, &mut drag);
        assert_eq!(settled.right, 4000, "right edge at {factor}");
        assert_eq!(settled.top, 0, "top edge at {factor}");
    }
}

#[test]
fn shortcut_zoom_sequence_matches_multipliers() {
    let steps = ZoomSteps::default();
    let mut scale = ScaleHandler::new();

    scale.on_scale(steps.zoom_in());
    scale.on_scale(steps.zoom_in());
    assert_abs_diff_eq!(scale.factor(), 1.44, epsilon = 1e-6);

    scale.on_scale(steps.zoom_out());
    assert_abs_diff_eq!(scale.factor(), 1.152, epsilon = 1e-6);

    scale.reset_factor();
    assert_abs_diff_eq!(scale.factor(), 1.0);
}

#[test]
fn zooming_out_below_one_shows_whole_image() {
    let calc = CropCalculator::default();
    let steps = ZoomSteps::default();
    let geo = geometry((1000, 500), (800.0, 606.0));
    let mut scale = ScaleHandler::new();
    let mut drag = DragHandler::new();

    scale.on_scale(steps.zoom_out());
    drag.on_drag(DragOffset::new(40.0, 40.0));

    assert_eq!(
        calc.compute(geo, scale.factor(), &mut drag),
        CropRectangle::full(geo.image)
    );
}

#[test]
fn pan_accumulates_then_clamps_at_edge() {
    let calc = CropCalculator::default();
    let geo = geometry((1000, 1000), (500.0, 500.0));
    let mut drag = DragHandler::new();

    drag.on_drag(DragOffset::new(10.0, 0.0));
    drag.on_drag(DragOffset::new(-3.0, 0.0));
    assert_eq!(drag.amount(), DragOffset::new(7.0, 0.0));

    let centered = calc.compute(geo, 2.0, &mut DragHandler::new());
    let panned = calc.compute(geo, 2.0, &mut drag);
    assert!(panned.left < centered.left);

    // Keep dragging right until the window hits the left edge.
    for _ in 0..200 {
        drag.on_drag(DragOffset::new(25.0, 0.0));
        let _ = calc.compute(geo, 2.0, &mut drag);
    }
    let at_edge = calc.compute(geo, 2.0, &mut drag);
    assert_eq!(at_edge.left, 0);

    // The first drag back moves away from the edge immediately.
    drag.on_drag(DragOffset::new(-25.0, 0.0));
    let back = calc.compute(geo, 2.0, &mut drag);
    assert!(back.left > 0);
}
