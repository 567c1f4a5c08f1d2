// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Keeps the message handling in one place so the lifecycle rules stay easy
//! to audit: the controller only flips state through `toggle`, the backdrop
//! only advances through `tick`, and a close request releases both before
//! the window goes away.

use super::{App, Message};
use crate::playback::VideoSurface;
use crate::ui::shell;
use crate::video_player::PlaybackMessage;
use iced::widget::image;
use iced::{window, Task};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Shell(shell::Message::TogglePlayback) => {
            app.controller.toggle();
            Task::none()
        }
        Message::Playback(playback) => handle_playback(app, playback),
        Message::Tick(now) => {
            app.backdrop.tick(now);
            Task::none()
        }
        Message::WindowCloseRequested(id) => {
            // Release the animation and the decoder before the window closes.
            app.backdrop.stop();
            app.controller.detach();
            window::close(id)
        }
    }
}

fn handle_playback(app: &mut App, message: PlaybackMessage) -> Task<Message> {
    match message {
        PlaybackMessage::Started(sender) => {
            app.controller.attach(VideoSurface::new(sender));
            app.last_error = None;
        }
        PlaybackMessage::FrameReady {
            rgba_data,
            width,
            height,
            ..
        } => {
            app.current_frame = Some(image::Handle::from_rgba(
                width,
                height,
                rgba_data.as_ref().clone(),
            ));
        }
        PlaybackMessage::Error(error) => {
            eprintln!("Clip playback error: {error}");
            app.controller.detach();
            app.last_error = Some(error);
        }
    }
    Task::none()
}
