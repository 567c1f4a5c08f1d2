// SPDX-License-Identifier: MPL-2.0
//! `iced_marquee` is a promotional tour page built with the Iced GUI framework.
//!
//! It renders a single dark page with an animated backdrop wash, a looping
//! highlight clip behind a play/pause toggle, and a static tour itinerary.
//! The page demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_marquee/0.1.0")]

pub mod app;
pub mod backdrop;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod playback;
pub mod ui;
pub mod video_player;
