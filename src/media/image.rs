// SPDX-License-Identifier: MPL-2.0
//! Image decoding and cropping.

use crate::domain::media::RawImage;
use crate::domain::viewport::CropRectangle;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Decodes the image at `path` into RGBA pixels.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// the format is invalid or unsupported.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RawImage> {
    let path = path.as_ref();
    let decoded = image_rs::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image(format!(
            "{} has no pixels ({width}x{height})",
            path.display()
        )));
    }

    Ok(RawImage::from_rgba(width, height, rgba.into_raw()))
}

/// Decodes an image on the blocking thread pool.
pub async fn load_image_async(path: PathBuf) -> Result<RawImage> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| Error::Io(format!("image decoding task failed: {e}")))?
}

/// Copies the pixels inside `rect` into a new image.
///
/// The rectangle is intersected with the image first. A rectangle covering the
/// whole image returns a clone sharing the same pixel buffer.
#[must_use]
pub fn crop_image(image: &RawImage, rect: CropRectangle) -> RawImage {
    let width = image.width();
    let height = image.height();

    let right = rect.right.min(width);
    let bottom = rect.bottom.min(height);
    let left = rect.left.min(right);
    let top = rect.top.min(bottom);

    if left == 0 && top == 0 && right == width && bottom == height {
        return image.clone();
    }

    let row_stride = width as usize * 4;
    let span = (left as usize * 4)..(right as usize * 4);
    let source = image.rgba_bytes();

    let mut pixels = Vec::with_capacity(span.len() * (bottom - top) as usize);
    for y in top as usize..bottom as usize {
        let row = &source[y * row_stride..(y + 1) * row_stride];
        pixels.extend_from_slice(&row[span.clone()]);
    }

    RawImage::from_rgba(right - left, bottom - top, pixels)
}
