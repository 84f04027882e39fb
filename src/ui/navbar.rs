// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every state of the locator.
//!
//! Carries the application title, the section labels and the theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment::{Horizontal, Vertical},
    font,
    widget::{button, Container, Row, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ThemeModeChanged(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, current: ThemeMode) -> Event {
    match message {
        Message::CycleTheme => Event::ThemeModeChanged(current.next()),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(">_")
                .size(typography::TITLE_MD)
                .font(Font::MONOSPACE)
                .color(ctx.colors.brand_primary),
        )
        .push(
            Text::new(ctx.i18n.tr("app-title"))
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(ctx.colors.text_primary),
        );

    let label = |key: &str| {
        Text::new(ctx.i18n.tr(key))
            .size(typography::BODY)
            .color(ctx.colors.text_secondary)
    };

    let theme_label = format!(
        "{}: {}",
        ctx.i18n.tr("navbar-theme"),
        ctx.i18n.tr(ctx.theme_mode.i18n_key())
    );
    let theme_button = button(Text::new(theme_label).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav)
        .on_press(Message::CycleTheme);

    let sections = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(label("navbar-tech-hubs"))
        .push(label("navbar-startups"))
        .push(theme_button);

    let row = Row::new()
        .padding([0.0, spacing::MD])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(sections);

    Container::new(Container::new(row).max_width(sizing::CONTENT_MAX_WIDTH))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_x(Horizontal::Center)
        .style(styles::container::navbar)
        .into()
}
