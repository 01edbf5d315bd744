// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small inline SVG documents drawn in white for the dark toolbar.
//! Handles are created once on first access and cached with `OnceLock`.
//!
//! Every filter has an "on" and an "off" variant; [`filter`] picks one.
//!
//! # Naming Convention
//!
//! Icons use visual names (`arrow_left`, not `go_back`), except the filter
//! icons, which are named after the filter they toggle.

use crate::domain::media::FilterType;
use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function returning a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Navigation
// =============================================================================

define_icon!(
    arrow_left,
    r#"<path d="M19 12H5"/><path d="M12 19l-7-7 7-7"/>"#,
    "Arrow pointing left."
);
define_icon!(
    refresh,
    r#"<path d="M21 12a9 9 0 1 1-2.6-6.4"/><path d="M21 3v6h-6"/>"#,
    "Circular arrow."
);

// =============================================================================
// Filters
// =============================================================================

define_icon!(
    grayscale_on,
    r#"<circle cx="12" cy="12" r="9" fill="white"/><path d="M12 3v18" stroke="black"/><path d="M12 3a9 9 0 0 0 0 18z" fill="black" stroke="none"/>"#,
    "Half-filled disc, grayscale filter active."
);
define_icon!(
    grayscale_off,
    r#"<circle cx="12" cy="12" r="9"/><path d="M12 3v18"/>"#,
    "Outlined split disc, grayscale filter inactive."
);
define_icon!(
    pixel_on,
    r#"<rect x="3" y="3" width="8" height="8" fill="white"/><rect x="13" y="13" width="8" height="8" fill="white"/><rect x="13" y="3" width="8" height="8"/><rect x="3" y="13" width="8" height="8"/>"#,
    "Checkered squares, pixel filter active."
);
define_icon!(
    pixel_off,
    r#"<rect x="3" y="3" width="8" height="8"/><rect x="13" y="13" width="8" height="8"/><rect x="13" y="3" width="8" height="8"/><rect x="3" y="13" width="8" height="8"/>"#,
    "Outlined squares, pixel filter inactive."
);
define_icon!(
    blur_on,
    r#"<circle cx="12" cy="12" r="9" fill="white" fill-opacity="0.5"/><circle cx="12" cy="12" r="5" fill="white"/>"#,
    "Soft filled disc, blur filter active."
);
define_icon!(
    blur_off,
    r#"<circle cx="12" cy="12" r="9" stroke-dasharray="2 3"/><circle cx="12" cy="12" r="5"/>"#,
    "Dashed disc, blur filter inactive."
);

/// Returns the icon for `filter` in its on or off state.
pub fn filter(filter: FilterType, enabled: bool) -> Svg<'static> {
    match (filter, enabled) {
        (FilterType::GrayScale, true) => grayscale_on(),
        (FilterType::GrayScale, false) => grayscale_off(),
        (FilterType::Pixel, true) => pixel_on(),
        (FilterType::Pixel, false) => pixel_off(),
        (FilterType::Blur, true) => blur_on(),
        (FilterType::Blur, false) => blur_off(),
    }
}

/// Sizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
