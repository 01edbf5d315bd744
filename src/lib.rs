// SPDX-License-Identifier: MPL-2.0
//! `photo_viewer` is a photo viewer built with the Iced GUI framework.
//!
//! It browses the images of one directory, shows the selected image in a
//! zoomable and draggable viewport, and applies toggleable grayscale,
//! pixelate and blur filters.
//!
//! # Layers
//!
//! - [`domain`] - Crop, zoom and drag math plus image and filter types
//! - [`application`] - Ports the UI talks to
//! - [`media`] - Decoding, cropping, filtering and the directory-backed session
//! - [`ui`] - Iced components
//! - [`app`] - Root state, update loop, configuration

pub mod app;
pub mod application;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
