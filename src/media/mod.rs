// SPDX-License-Identifier: MPL-2.0
//! Image decoding, filtering, and the directory-backed image session.
//!
//! These are the adapters around the `image` crate. The pure types they work
//! on live in [`crate::domain::media`].

pub mod filter;
pub mod image;
pub mod library;

pub use filter::{apply_filters, FilterSettings};
pub use image::{crop_image, load_image, load_image_async};
pub use library::ImageLibrary;
