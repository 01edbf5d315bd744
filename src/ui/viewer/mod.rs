// SPDX-License-Identifier: MPL-2.0
//! Full-image viewer: toolbar, zoomable viewport and loading screen.

pub mod component;
pub mod subcomponents;
pub mod toolbar;
pub mod viewport;

pub use component::{Effect, Message, State};
pub use viewport::{Shortcut, ViewportSettings};
