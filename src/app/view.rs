// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a navbar over a scrollable column holding the hero header and
//! the locator.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::locator::{self, ViewContext as LocatorViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment, font,
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub locator: &'a locator::State,
    pub theme_mode: ThemeMode,
    pub colors: ColorScheme,
    /// i18n key of a pending notice.
    pub notice: Option<&'a str>,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let locator_view = locator::view(
        ctx.locator,
        LocatorViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
        },
    )
    .map(Message::Locator);

    let mut main = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center);

    if let Some(key) = ctx.notice {
        main = main.push(notice(ctx.i18n, key));
    }

    main = main.push(hero(ctx.i18n, &ctx.colors)).push(locator_view);

    let body = scrollable(
        Container::new(main)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill);

    Container::new(Column::new().push(navbar_view).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn hero<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let heavy = Font {
        weight: font::Weight::ExtraBold,
        ..Font::DEFAULT
    };

    let headline = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr("hero-title-lead"))
                .size(typography::HERO)
                .font(heavy)
                .color(colors.text_primary),
        )
        .push(
            Text::new(i18n.tr("hero-title-accent"))
                .size(typography::HERO)
                .font(heavy)
                .color(colors.brand_primary),
        );

    let subtitle = Text::new(i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .color(colors.text_secondary)
        .align_x(alignment::Horizontal::Center);

    Column::new()
        .spacing(spacing::SM)
        .padding([spacing::MD, 0.0])
        .max_width(sizing::CARD_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(headline)
        .push(subtitle)
        .into()
}

fn notice<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr(key))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("×").size(typography::BODY_LG))
                .padding([0.0, spacing::XS])
                .style(styles::button::link)
                .on_press(Message::DismissNotice),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::error_banner)
        .into()
}
