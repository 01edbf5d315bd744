// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Image and filter types ([`RawImage`](media::RawImage),
//!   [`FilterType`](media::FilterType), [`FilterSelection`](media::FilterSelection))
//! - [`viewport`]: Zoom, pan, and crop computation
//!   ([`ScaleHandler`](viewport::ScaleHandler), [`DragHandler`](viewport::DragHandler),
//!   [`CropCalculator`](viewport::CropCalculator))

pub mod media;
pub mod viewport;
