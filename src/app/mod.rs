// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the tour page.
//!
//! The `App` struct wires together localization, the playback controller
//! and the backdrop wash, and translates messages into the few side effects
//! the page has. The lifecycle policy lives here: the backdrop starts when
//! the page comes up, and a window close request releases both the backdrop
//! and the decoder before the window goes away.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::backdrop::Backdrop;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::playback::{Controller, VideoSurface};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state for the tour page.
pub struct App {
    pub i18n: I18n,
    /// Perpetual background wash animation.
    backdrop: Backdrop,
    /// Play/pause state machine for the highlight clip.
    controller: Controller<VideoSurface>,
    /// Most recent decoded frame, displayed in the video pane.
    current_frame: Option<iced::widget::image::Handle>,
    /// Path of the highlight clip, if one was configured.
    clip_path: Option<PathBuf>,
    /// Last decoder error, shown on the video pane.
    last_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("playback", &self.controller.state())
            .field("backdrop_running", &self.backdrop.is_running())
            .field("clip_path", &self.clip_path)
            .finish()
    }
}

/// Builds the window settings.
///
/// Close requests are intercepted so the update loop can release the
/// backdrop and the decoder before the window actually closes.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            backdrop: Backdrop::new(),
            controller: Controller::new(),
            current_frame: None,
            clip_path: None,
            last_error: None,
        }
    }
}

impl App {
    /// Initializes application state from the config file and launcher flags.
    /// The backdrop starts immediately; it runs for the life of the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load config: {error}");
            config::Config::default()
        });

        let i18n = I18n::new(flags.lang.clone(), &config);

        let clip_path = flags
            .clip_path
            .or(config.video)
            .map(PathBuf::from);

        let mut app = App {
            i18n,
            clip_path,
            ..Self::default()
        };

        app.backdrop.start(Instant::now());

        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.backdrop.is_running());
        let playback_sub = subscription::create_playback_subscription(self.clip_path.as_ref());

        Subscription::batch([event_sub, tick_sub, playback_sub])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::playback::PlaybackState;
    use crate::ui::shell;
    use crate::video_player::{DecoderCommandSender, PlaybackMessage};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn test_sender() -> (
        DecoderCommandSender,
        mpsc::UnboundedReceiver<crate::video_player::DecoderCommand>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        (DecoderCommandSender::new(tx), rx)
    }

    #[test]
    fn title_uses_localized_window_title() {
        let mut app = App::default();
        app.i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(app.title(), "Minisimi World Tour");

        app.i18n.set_locale("ja".parse().unwrap());
        assert_eq!(app.title(), "Minisimi ワールドツアー");
    }

    #[test]
    fn backdrop_runs_after_startup() {
        let (app, _task) = App::new(Flags::default());
        assert!(app.backdrop.is_running());
    }

    #[test]
    fn toggle_without_surface_stays_paused() {
        let mut app = App::default();

        let _ = app.update(Message::Shell(shell::Message::TogglePlayback));

        assert_eq!(app.controller.state(), PlaybackState::Paused);
    }

    #[test]
    fn toggle_after_playback_started_flips_state() {
        let mut app = App::default();
        let (sender, _rx) = test_sender();

        let _ = app.update(Message::Playback(PlaybackMessage::Started(sender)));
        let _ = app.update(Message::Shell(shell::Message::TogglePlayback));

        assert_eq!(app.controller.state(), PlaybackState::Playing);
    }

    #[test]
    fn frame_ready_updates_current_frame() {
        let mut app = App::default();

        let _ = app.update(Message::Playback(PlaybackMessage::FrameReady {
            rgba_data: Arc::new(vec![0u8; 4]),
            width: 1,
            height: 1,
            pts_secs: 0.0,
        }));

        assert!(app.current_frame.is_some());
    }

    #[test]
    fn decoder_error_detaches_surface_and_records_error() {
        let mut app = App::default();
        let (sender, _rx) = test_sender();

        let _ = app.update(Message::Playback(PlaybackMessage::Started(sender)));
        let _ = app.update(Message::Playback(PlaybackMessage::Error(
            "decode failed".to_owned(),
        )));

        assert!(!app.controller.has_surface());
        assert_eq!(app.controller.state(), PlaybackState::Paused);
        assert_eq!(app.last_error.as_deref(), Some("decode failed"));
    }

    #[test]
    fn close_request_releases_backdrop_and_surface() {
        let (mut app, _task) = App::new(Flags::default());
        let (sender, _rx) = test_sender();
        let _ = app.update(Message::Playback(PlaybackMessage::Started(sender)));

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert!(!app.backdrop.is_running());
        assert!(!app.controller.has_surface());
    }

    #[test]
    fn tick_advances_backdrop_phase() {
        let mut app = App::default();
        let start = Instant::now();
        app.backdrop.start(start);

        let _ = app.update(Message::Tick(
            start + std::time::Duration::from_millis(2500),
        ));

        assert!(app.backdrop.phase() > 0.0);
    }
}
