// SPDX-License-Identifier: MPL-2.0
//! Looping playback backend for the highlight clip.
//!
//! A blocking FFmpeg decode loop delivers RGBA frames over channels; an
//! Iced subscription bridges them into the update loop. The clip restarts
//! from the beginning whenever it reaches the end, so it plays forever
//! until paused or torn down. There is no seeking and no audio: the clip
//! is a silent background highlight.

mod decoder;
mod subscription;

pub use decoder::{DecodedFrame, DecoderCommand, DecoderEvent, LoopingDecoder};
pub use subscription::{video_playback, DecoderCommandSender, PlaybackMessage};

use crate::error::{Error, Result};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg exactly once, clamping its log level so decode
/// warnings do not spam stderr.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Video(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}
