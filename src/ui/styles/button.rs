// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the round play/pause overlay button on the video pane.
///
/// Pink at rest, cyan on hover, mirroring the page's accent trio. The
/// glyph inside is black, so `text_color` stays black in every state.
pub fn play_overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => theme::play_button_hover_color(),
        _ => theme::play_button_color(),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::BLACK,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Style for the header nav links: bare text, accent-tinted on hover.
pub fn nav_link(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => accent,
            _ => theme::text_color(),
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..Default::default()
        }
    }
}
