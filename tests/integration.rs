// SPDX-License-Identifier: MPL-2.0
use iced_marquee::config::{self, Config};
use iced_marquee::domain::playback::PlaybackState;
use iced_marquee::i18n::fluent::I18n;
use iced_marquee::playback::{Controller, MediaSurface};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        video: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to ja
    let japanese_config = Config {
        language: Some("ja".to_string()),
        video: None,
    };
    config::save_to_path(&japanese_config, &temp_config_file_path)
        .expect("Failed to write japanese config file");

    let loaded_japanese_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load japanese config from path");
    let i18n_ja = I18n::new(None, &loaded_japanese_config);
    assert_eq!(i18n_ja.current_locale().to_string(), "ja");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_clip_path_round_trips_through_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        video: Some("/media/highlight.mp4".to_string()),
    };
    config::save_to_path(&config, &temp_config_file_path).expect("Failed to write config file");

    let loaded =
        config::load_from_path(&temp_config_file_path).expect("Failed to load config from path");
    assert_eq!(loaded.video.as_deref(), Some("/media/highlight.mp4"));

    dir.close().expect("Failed to close temporary directory");
}

/// Surface that records the commands it receives, standing in for the
/// decoder-backed one.
struct RecordingSurface {
    commands: Rc<RefCell<Vec<&'static str>>>,
}

impl MediaSurface for RecordingSurface {
    fn play(&mut self) {
        self.commands.borrow_mut().push("play");
    }

    fn pause(&mut self) {
        self.commands.borrow_mut().push("pause");
    }
}

#[test]
fn test_full_playback_session() {
    let commands = Rc::new(RefCell::new(Vec::new()));
    let mut controller: Controller<RecordingSurface> = Controller::new();

    // Before the decoder reports in, toggling does nothing.
    controller.toggle();
    assert_eq!(controller.state(), PlaybackState::Paused);
    assert!(commands.borrow().is_empty());

    // Decoder came up; the surface is attached and the session plays,
    // pauses and resumes.
    controller.attach(RecordingSurface {
        commands: Rc::clone(&commands),
    });
    controller.toggle();
    controller.toggle();
    controller.toggle();
    assert_eq!(controller.state(), PlaybackState::Playing);
    assert_eq!(*commands.borrow(), vec!["play", "pause", "play"]);

    // Teardown resets to the paused default without issuing commands.
    controller.detach();
    assert_eq!(controller.state(), PlaybackState::Paused);
    assert_eq!(commands.borrow().len(), 3);
}
