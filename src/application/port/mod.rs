// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`content`]: The image-viewing session consumed by the viewer screens
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod content;

pub use content::ContentState;
