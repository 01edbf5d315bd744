// SPDX-License-Identifier: MPL-2.0
//! Pixel filters applied to the displayed image.
//!
//! The algorithms themselves come from the `image` crate; this module only
//! chains them in [`FilterType::ALL`] order.

use crate::domain::media::{FilterSelection, FilterType, RawImage};
use image_rs::imageops::{self, FilterType as ResampleFilter};
use image_rs::{DynamicImage, RgbaImage};

/// Default edge length of the blocks produced by the pixel filter.
pub const DEFAULT_PIXEL_BLOCK_SIZE: u32 = 10;

/// Default Gaussian sigma of the blur filter.
pub const DEFAULT_BLUR_SIGMA: f32 = 8.0;

/// Tuning parameters for the filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSettings {
    pub pixel_block_size: u32,
    pub blur_sigma: f32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            pixel_block_size: DEFAULT_PIXEL_BLOCK_SIZE,
            blur_sigma: DEFAULT_BLUR_SIGMA,
        }
    }
}

impl FilterSettings {
    /// Creates settings, replacing out-of-range values with the defaults.
    #[must_use]
    pub fn new(pixel_block_size: u32, blur_sigma: f32) -> Self {
        Self {
            pixel_block_size: if pixel_block_size == 0 {
                DEFAULT_PIXEL_BLOCK_SIZE
            } else {
                pixel_block_size
            },
            blur_sigma: if blur_sigma.is_finite() && blur_sigma > 0.0 {
                blur_sigma
            } else {
                DEFAULT_BLUR_SIGMA
            },
        }
    }
}

/// Applies every filter in `selection` to `original`.
///
/// An empty selection returns a clone sharing the original pixel buffer.
#[must_use]
pub fn apply_filters(
    original: &RawImage,
    selection: FilterSelection,
    settings: FilterSettings,
) -> RawImage {
    if selection.is_empty() {
        return original.clone();
    }

    let Some(mut buffer) = RgbaImage::from_raw(
        original.width(),
        original.height(),
        original.rgba_bytes().to_vec(),
    ) else {
        return original.clone();
    };

    for filter in selection.iter() {
        buffer = match filter {
            FilterType::GrayScale => grayscale(buffer),
            FilterType::Pixel => pixelate(&buffer, settings.pixel_block_size),
            FilterType::Blur => imageops::fast_blur(&buffer, settings.blur_sigma),
        };
    }

    let (width, height) = buffer.dimensions();
    RawImage::from_rgba(width, height, buffer.into_raw())
}

fn grayscale(buffer: RgbaImage) -> RgbaImage {
    DynamicImage::ImageRgba8(buffer).grayscale().to_rgba8()
}

/// Downsamples by `block_size` then upsamples back with nearest-neighbour so
/// each block takes a single colour.
fn pixelate(buffer: &RgbaImage, block_size: u32) -> RgbaImage {
    let (width, height) = buffer.dimensions();
    let small_w = width.div_ceil(block_size).max(1);
    let small_h = height.div_ceil(block_size).max(1);

    let small = imageops::resize(buffer, small_w, small_h, ResampleFilter::Nearest);
    imageops::resize(&small, width, height, ResampleFilter::Nearest)
}
