// SPDX-License-Identifier: MPL-2.0
//! Image session port.
//!
//! The viewer screens read the selected image and filter state through
//! [`ContentState`] and send navigation and filter commands back through it.
//! Decoding is not part of the contract: navigation returns the path that
//! must be decoded next, and the caller schedules that work off the UI
//! thread.

use crate::domain::media::{FilterType, RawImage};
use std::path::PathBuf;

/// Port for the image-viewing session.
pub trait ContentState {
    /// Returns `true` once the selected image is decoded and filtered.
    fn is_content_ready(&self) -> bool;

    /// The selected image with active filters applied, if ready.
    fn selected_image(&self) -> Option<&RawImage>;

    /// File name of the selected image, or an empty string.
    fn selected_image_name(&self) -> &str;

    /// Drops active filters and shows the unfiltered image again.
    fn restore_main_image(&mut self);

    /// Moves to the next image, wrapping around. Returns the path to decode.
    fn swipe_next(&mut self) -> Option<PathBuf>;

    /// Moves to the previous image, wrapping around. Returns the path to decode.
    fn swipe_previous(&mut self) -> Option<PathBuf>;

    /// Flips whether `filter` is applied to the selected image.
    fn toggle_filter(&mut self, filter: FilterType);

    fn is_filter_enabled(&self, filter: FilterType) -> bool;
}
