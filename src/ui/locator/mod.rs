// SPDX-License-Identifier: MPL-2.0
//! Location-gated view: asks for the user's position, then shows a map of
//! what is nearby.
//!
//! The component follows the usual "state down, messages up" split:
//! [`State::handle`] is a pure state transition that returns an [`Effect`]
//! for the application to execute (start a location request, open a URL),
//! and [`view`] renders whichever of the three [`ViewState`]s is current.

mod state;
mod view;

pub use state::{Effect, Message, RequestToken, State, ViewState};
pub use view::{view, ViewContext};
