// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::shell;
use crate::video_player::PlaybackMessage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message from the page shell (play/pause button).
    Shell(shell::Message),
    /// A message from the clip playback subscription.
    Playback(PlaybackMessage),
    /// Periodic tick driving the backdrop wash animation.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Values passed from the command line into the application at startup.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `--lang ja`.
    pub lang: Option<String>,
    /// Path to the highlight clip, overriding the configured one.
    pub clip_path: Option<String>,
}
