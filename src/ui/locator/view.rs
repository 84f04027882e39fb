// SPDX-License-Identifier: MPL-2.0
//! Rendering of the three locator states.

use super::state::{Message, State, ViewState};
use crate::domain::error::GeolocationError;
use crate::domain::geo::Position;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::animated_spinner::AnimatedSpinner;
use crate::ui::widgets::map_frame::MapFrame;
use iced::widget::{button, image, Column, Container, Row, Stack, Text};
use iced::{alignment, font, Element, Font, Length};

/// Everything the locator needs from the application to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
}

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Renders the current state of the locator.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    match state.view_state() {
        ViewState::Idle { error } => idle(error, &ctx),
        ViewState::Loading => loading(state.spinner_rotation(), &ctx),
        ViewState::Located { position, error } => {
            located(position, state.map_tiles(), error, &ctx)
        }
    }
}

fn idle<'a>(error: Option<GeolocationError>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let badge = Container::new(Text::new("◎").size(sizing::ICON_XL * 0.75))
        .width(Length::Fixed(sizing::ICON_XL * 1.6))
        .height(Length::Fixed(sizing::ICON_XL * 1.6))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::icon_badge);

    let title = Text::new(i18n.tr("locator-idle-title"))
        .size(typography::TITLE_MD)
        .font(BOLD)
        .color(ctx.colors.text_primary);

    let body = Text::new(i18n.tr("locator-idle-body"))
        .size(typography::BODY)
        .color(ctx.colors.text_secondary)
        .align_x(alignment::Horizontal::Center);

    let scan = button(Text::new(i18n.tr("locator-scan-button")).font(BOLD))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary)
        .on_press(Message::AcquireRequested);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(badge)
        .push(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(title)
                .push(body),
        )
        .push(scan);

    if let Some(error) = error {
        content = content.push(error_banner(error, i18n));
    }

    card(content.into())
}

fn loading<'a>(rotation: f32, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(ctx.colors.brand_primary, rotation)
        .size(40.0)
        .into_element();

    let caption = Text::new(ctx.i18n.tr("locator-loading"))
        .size(typography::BODY)
        .color(ctx.colors.text_secondary);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(caption);

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CARD_MAX_WIDTH)
        .height(Length::Fixed(sizing::LOADING_CARD_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::card)
        .into()
}

fn located<'a>(
    position: Position,
    tiles: Option<&'a image::Handle>,
    error: Option<GeolocationError>,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let map = MapFrame::new(&position, tiles, ctx.colors.brand_primary);
    let source = map.source().to_string();
    let attribution = map
        .has_tiles()
        .then(|| i18n.tr("locator-map-attribution"));

    let open_maps = button(
        Text::new(i18n.tr("locator-open-maps"))
            .size(typography::CAPTION)
            .font(BOLD),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::floating)
    .on_press(Message::OpenExternalMapRequested);

    let overlay = Container::new(open_maps)
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Right);

    let surface = Stack::new()
        .push(map.into_element(sizing::MAP_HEIGHT))
        .push(overlay);

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("locator-showing-nearby"))
                .size(typography::BODY)
                .color(ctx.colors.brand_primary)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("locator-refresh")).size(typography::BODY))
                .padding(0)
                .style(styles::button::link)
                .on_press(Message::AcquireRequested),
        );

    let coordinates = Text::new(position.format_hemispheres())
        .size(typography::CAPTION)
        .font(Font::MONOSPACE)
        .color(ctx.colors.text_secondary);

    let source_caption = Text::new(source)
        .size(typography::CAPTION)
        .color(ctx.colors.text_secondary);

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .push(footer)
        .push(coordinates)
        .push(source_caption);
    if let Some(attribution) = attribution {
        details = details.push(
            Text::new(attribution)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );
    }

    let map_card = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(surface)
            .push(details),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(styles::container::card);

    let full_list = button(
        Text::new(i18n.tr("locator-view-full-list"))
            .size(typography::BODY_LG)
            .font(BOLD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::button::primary_block)
    .on_press(Message::OpenExternalMapRequested);

    let primary_action = Container::new(full_list)
        .max_width(sizing::PRIMARY_ACTION_MAX_WIDTH)
        .width(Length::Fill);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    if let Some(error) = error {
        content = content.push(error_banner(error, i18n));
    }

    content.push(map_card).push(primary_action).into()
}

fn error_banner<'a>(error: GeolocationError, i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr(error.i18n_key())).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::error_banner)
        .into()
}

fn card(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .padding(spacing::XXL)
        .width(Length::Fill)
        .max_width(sizing::CARD_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::card)
        .into()
}
