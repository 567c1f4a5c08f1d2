// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the tour page.

use crate::ui::design_tokens::palette::{self, BLACK, GRAY_800, WHITE};
use iced::Color;

/// Background color of the whole page.
pub fn page_background() -> Color {
    BLACK
}

/// Surface color of the tour stop cards.
pub fn card_background() -> Color {
    GRAY_800
}

/// Primary text color.
pub fn text_color() -> Color {
    WHITE
}

/// Accent used for the play/pause overlay button at rest.
pub fn play_button_color() -> Color {
    palette::ACCENT_PINK
}

/// Accent used for the play/pause overlay button on hover.
pub fn play_button_hover_color() -> Color {
    palette::ACCENT_CYAN
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}
