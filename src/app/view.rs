// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Stacks the page shell on top of the animated backdrop wash and applies
//! the page container style.

use super::{App, Message};
use crate::ui::shell;
use crate::ui::styles;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let ctx = shell::ViewContext { i18n: &app.i18n };

    let model = shell::Model {
        playback: app.controller.state(),
        frame: app.current_frame.as_ref(),
        has_clip: app.clip_path.is_some(),
        clip_error: app.last_error.as_deref(),
    };

    let page = shell::view(&ctx, &model).map(Message::Shell);

    let stack = Stack::new().push(app.backdrop.view()).push(page);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
