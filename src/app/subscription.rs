// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three subscriptions exist: native window events (close requests), the
//! backdrop animation tick, and the clip playback stream. The tick is only
//! registered while the backdrop is running, so stopping the backdrop
//! cancels the timer rather than merely freezing the phase.

use super::Message;
use crate::video_player;
use iced::{event, time, Subscription};
use std::path::PathBuf;
use std::time::Duration;

/// Interval between backdrop animation ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Listens for window close requests so the update loop can release the
/// backdrop and the decoder before closing.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Creates the periodic tick subscription for the backdrop wash.
pub fn create_tick_subscription(backdrop_running: bool) -> Subscription<Message> {
    if backdrop_running {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the clip playback subscription when a clip path is configured.
pub fn create_playback_subscription(clip_path: Option<&PathBuf>) -> Subscription<Message> {
    match clip_path {
        Some(path) => video_player::video_playback(path.clone()).map(Message::Playback),
        None => Subscription::none(),
    }
}
