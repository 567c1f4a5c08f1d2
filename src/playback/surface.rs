// SPDX-License-Identifier: MPL-2.0
//! The media surface capability and its production implementation.

use crate::video_player::{DecoderCommand, DecoderCommandSender};

/// An externally owned playable resource exposing play and pause.
///
/// The controller never learns whether a command took effect; the
/// capability is deliberately infallible. Test doubles implement this to
/// record issued commands.
pub trait MediaSurface {
    /// Issue a "start playing" command to the resource.
    fn play(&mut self);

    /// Issue a "pause" command to the resource.
    fn pause(&mut self);
}

/// Production surface: forwards commands to the looping video decoder.
///
/// Holds the cloneable command sender handed over by the playback
/// subscription. A dead decoder makes sends fail; those errors are
/// swallowed, matching the no-failure contract of [`MediaSurface`].
#[derive(Debug, Clone)]
pub struct VideoSurface {
    sender: DecoderCommandSender,
}

impl VideoSurface {
    /// Wraps the command sender received from the playback subscription.
    #[must_use]
    pub fn new(sender: DecoderCommandSender) -> Self {
        Self { sender }
    }
}

impl MediaSurface for VideoSurface {
    fn play(&mut self) {
        let _ = self.sender.send(DecoderCommand::Play);
    }

    fn pause(&mut self) {
        let _ = self.sender.send(DecoderCommand::Pause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn surface_forwards_play_and_pause() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut surface = VideoSurface::new(DecoderCommandSender::new(tx));

        surface.play();
        surface.pause();

        assert!(matches!(rx.try_recv(), Ok(DecoderCommand::Play)));
        assert!(matches!(rx.try_recv(), Ok(DecoderCommand::Pause)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn surface_swallows_send_errors_when_decoder_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut surface = VideoSurface::new(DecoderCommandSender::new(tx));

        // Must not panic or surface an error.
        surface.play();
        surface.pause();
    }
}
