// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::SPINNER_TICK;
use crate::ui::locator;
use iced::{time, Subscription};

/// Creates the spinner tick subscription, active only while a location
/// request is outstanding.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_TICK).map(|_| Message::Locator(locator::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
