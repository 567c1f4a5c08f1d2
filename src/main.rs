// SPDX-License-Identifier: MPL-2.0
//! Binary entry point: parses command-line flags and launches the page.

use iced_marquee::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        clip_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    if let Err(error) = iced_marquee::video_player::init_ffmpeg() {
        eprintln!("Failed to initialize FFmpeg: {error}");
    }

    app::run(flags)
}
