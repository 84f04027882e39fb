// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets drawn on a canvas.
//!
//! - [`animated_spinner`] - Indeterminate progress ring shown while locating
//! - [`map_frame`] - Surface carrying the embedded map source and a position marker

pub mod animated_spinner;
pub mod map_frame;
