// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Directory listing with a preview of the selected image
//! - [`viewer`] - Full image with toolbar, zoom, pan and navigation
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode management
//! - [`icons`] - SVG icons for the toolbar and gallery

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
