// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Viewport**: Zoom curve, shortcut multipliers, double-click window
//! - **Filters**: Pixelate block size and blur strength

pub use crate::domain::viewport::{
    DEFAULT_ZOOM_CURVE_EXPONENT, DEFAULT_ZOOM_IN_MULTIPLIER, DEFAULT_ZOOM_OUT_MULTIPLIER,
};
pub use crate::media::filter::{DEFAULT_BLUR_SIGMA, DEFAULT_PIXEL_BLOCK_SIZE};

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Maximum delay between two presses for them to count as a double-click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 350;

/// Shortest accepted double-click window.
pub const MIN_DOUBLE_CLICK_MS: u64 = 100;

/// Longest accepted double-click window.
pub const MAX_DOUBLE_CLICK_MS: u64 = 2000;

// ==========================================================================
// Filter Defaults
// ==========================================================================

/// Largest accepted pixelate block size.
pub const MAX_PIXEL_BLOCK_SIZE: u32 = 256;

/// Largest accepted blur sigma.
pub const MAX_BLUR_SIGMA: f32 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_click_default_is_within_bounds() {
        assert!((MIN_DOUBLE_CLICK_MS..=MAX_DOUBLE_CLICK_MS).contains(&DEFAULT_DOUBLE_CLICK_MS));
    }

    #[test]
    fn filter_defaults_are_within_bounds() {
        assert!(DEFAULT_PIXEL_BLOCK_SIZE > 0 && DEFAULT_PIXEL_BLOCK_SIZE <= MAX_PIXEL_BLOCK_SIZE);
        assert!(DEFAULT_BLUR_SIGMA > 0.0 && DEFAULT_BLUR_SIGMA <= MAX_BLUR_SIGMA);
    }
}
