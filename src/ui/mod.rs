// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`locator`] - Location-gated view: call to action, loading, map
//! - [`navbar`] - Title bar with section labels and the theme toggle
//! - [`widgets`] - Custom canvas widgets (spinner, map frame)
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod locator;
pub mod navbar;
pub mod styles;
pub mod theming;
pub mod widgets;
