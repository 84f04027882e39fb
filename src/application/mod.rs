// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`acquisition`]: The single "acquire a location" use case
//! - [`map_render`]: Raster of the area around an acquired position
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services

pub mod acquisition;
pub mod map_render;
pub mod port;

pub use acquisition::acquire;
pub use map_render::render_area;
