// SPDX-License-Identifier: MPL-2.0
//! The promo page shell: header, hero, video pane, tour cards and footer.
//!
//! The shell is almost entirely static. The only interactive element is the
//! round play/pause button overlaid on the video pane; everything else is
//! presentation. Layout mirrors a single scrolling page with the animated
//! backdrop wash stacked underneath (composed by the caller).

use crate::domain::playback::PlaybackState;
use crate::domain::tour::TOUR_STOPS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::svg::Svg;
use iced::widget::{button, image, scrollable, tooltip, Column, Container, Row, Stack, Text};
use iced::{Color, ContentFit, Element, Length};

/// Messages emitted by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The play/pause button on the video pane was pressed.
    TogglePlayback,
}

/// Read-only context for rendering the shell.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Snapshot of the state the shell needs to render.
pub struct Model<'a> {
    /// Current playback state, drives the overlay glyph and tooltip.
    pub playback: PlaybackState,
    /// Most recent decoded video frame, if any.
    pub frame: Option<&'a image::Handle>,
    /// Whether a clip path was supplied at all.
    pub has_clip: bool,
    /// Last playback error reported by the decoder, if any.
    pub clip_error: Option<&'a str>,
}

/// Which glyph the overlay button shows for a given playback state.
///
/// Paused shows the play triangle (pressing starts playback), playing shows
/// the pause bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Play,
    Pause,
}

pub fn glyph_for(state: PlaybackState) -> Glyph {
    if state.is_playing() {
        Glyph::Pause
    } else {
        Glyph::Play
    }
}

/// Renders the full page shell.
pub fn view<'a>(ctx: &ViewContext<'a>, model: &Model<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXL)
        .push(header(ctx))
        .push(hero(ctx))
        .push(video_pane(ctx, model))
        .push(tour_cards(ctx))
        .push(footer(ctx));

    let page = Container::new(content)
        .width(Length::Fill)
        .padding([spacing::LG, spacing::XL]);

    scrollable(page).width(Length::Fill).height(Length::Fill).into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("header-title"))
        .size(typography::TITLE_LG)
        .color(palette::ACCENT_PINK);

    let nav = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(nav_link(ctx.i18n.tr("nav-dates"), palette::ACCENT_PINK))
        .push(nav_link(ctx.i18n.tr("nav-tickets"), palette::ACCENT_CYAN))
        .push(nav_link(ctx.i18n.tr("nav-gallery"), palette::ACCENT_YELLOW));

    Row::new()
        .align_y(Vertical::Center)
        .push(title)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(nav)
        .into()
}

/// A nav entry. The links are decorative on this page, so the buttons have
/// no press handler and only contribute the hover tint.
fn nav_link<'a>(label: String, accent: Color) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(accent))
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("hero-heading"))
        .size(typography::DISPLAY)
        .align_x(Horizontal::Center);

    let tagline = Text::new(ctx.i18n.tr("hero-tagline"))
        .size(typography::BODY_LG)
        .color(muted_text_color())
        .align_x(Horizontal::Center);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(tagline)
        .into()
}

fn video_pane<'a>(ctx: &ViewContext<'a>, model: &Model<'a>) -> Element<'a, Message> {
    let surface: Element<'a, Message> = match (model.frame, model.has_clip) {
        (Some(handle), _) => image::Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::VIDEO_PANE_MAX_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        (None, true) => placeholder(Text::new(ctx.i18n.tr("video-loading")).color(muted_text_color())),
        (None, false) => placeholder(Text::new(ctx.i18n.tr("video-missing")).color(muted_text_color())),
    };

    let tooltip_key = match glyph_for(model.playback) {
        Glyph::Play => "video-play-tooltip",
        Glyph::Pause => "video-pause-tooltip",
    };

    let glyph: Element<'static, Message> = playback_glyph(model.playback).into();
    let toggle_button = button(
        Container::new(glyph)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::PLAY_BUTTON))
    .height(Length::Fixed(sizing::PLAY_BUTTON))
    .style(styles::button::play_overlay)
    .on_press(Message::TogglePlayback);

    let toggle_button = tooltip(
        toggle_button,
        Text::new(ctx.i18n.tr(tooltip_key)),
        tooltip::Position::Top,
    )
    .gap(4);

    let mut stack = Stack::new().push(surface);

    stack = stack.push(
        Container::new(toggle_button)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Bottom),
    );

    if let Some(error) = model.clip_error {
        stack = stack.push(
            Container::new(
                Text::new(error.to_owned())
                    .size(typography::BODY)
                    .color(theme::error_text_color()),
            )
            .width(Length::Fill)
            .padding(spacing::SM)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
        );
    }

    Container::new(stack)
        .width(Length::Fill)
        .style(styles::container::video_pane)
        .into()
}

fn playback_glyph(state: PlaybackState) -> Svg<'static> {
    let icon = match glyph_for(state) {
        Glyph::Play => icons::play(),
        Glyph::Pause => icons::pause(),
    };
    icons::sized(icon, sizing::ICON_LG)
}

fn placeholder<'a>(message: Text<'a>) -> Element<'a, Message> {
    Container::new(message.size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::VIDEO_PANE_MAX_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn tour_cards<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);

    for stop in &TOUR_STOPS {
        let name = Text::new(format!("{} {}", stop.marker, ctx.i18n.tr(stop.name_key)))
            .size(typography::TITLE_SM);

        let blurb = Text::new(ctx.i18n.tr(stop.blurb_key))
            .size(typography::BODY)
            .color(muted_text_color());

        let card = Container::new(
            Column::new()
                .spacing(spacing::XS)
                .push(name)
                .push(blurb),
        )
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .style(styles::container::card);

        row = row.push(card);
    }

    row.into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        Text::new(ctx.i18n.tr("footer-copyright"))
            .size(typography::CAPTION)
            .color(muted_text_color()),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([spacing::LG, 0.0])
    .into()
}

fn muted_text_color() -> Color {
    Color {
        a: opacity::TEXT_MUTED,
        ..palette::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_state_shows_play_glyph() {
        assert_eq!(glyph_for(PlaybackState::Paused), Glyph::Play);
    }

    #[test]
    fn playing_state_shows_pause_glyph() {
        assert_eq!(glyph_for(PlaybackState::Playing), Glyph::Pause);
    }
}
