// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, and handle() method.
//! The viewport and component modules orchestrate them.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── toolbar.rs   - Back and filter buttons
//!     ├── loading      - Loading spinner
//!     └── viewport.rs  - Crop and display
//!           ├── zoom   - Wraps ScaleHandler
//!           └── drag   - Pointer gestures
//! ```

pub mod drag;
pub mod loading;
pub mod zoom;
