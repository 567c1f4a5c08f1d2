// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Full-page background behind everything, including the backdrop wash.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::page_background())),
        text_color: Some(theme::text_color()),
        ..Default::default()
    }
}

/// Rounded surface of a tour stop card.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::card_background())),
        text_color: Some(theme::text_color()),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded, shadowed frame around the hero video pane.
pub fn video_pane(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::card_background())),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
