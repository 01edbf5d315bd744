// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the domain and the adapters.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - The media layer implements application layer ports
//! - Presentation layer talks to adapters through these ports

pub mod port;
