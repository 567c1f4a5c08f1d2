// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for highlight clip playback.
//!
//! Connects the looping decoder to the UI event loop: decoder events flow
//! out as messages, play/pause commands flow back in through the
//! [`DecoderCommandSender`] announced by [`PlaybackMessage::Started`].

use super::{DecoderCommand, DecoderEvent, LoopingDecoder};
use iced::futures::SinkExt;
use iced::stream;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Subscription ID for clip playback.
/// Keyed by the clip path, so the subscription is recreated exactly when a
/// different clip is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ClipPlaybackId(PathBuf);

/// Handle for sending commands to the decoder from the UI.
/// This is cloneable and is wrapped by the playback surface.
#[derive(Clone)]
pub struct DecoderCommandSender {
    tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    /// Wraps the UI side of the decoder command channel.
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<DecoderCommand>) -> Self {
        Self { tx }
    }

    /// Sends a command to the decoder.
    pub fn send(&self, command: DecoderCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Decoder not running".to_string())
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the clip playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Subscription started, provides the command sender for play/pause.
    Started(DecoderCommandSender),

    /// A new frame is ready for display.
    FrameReady {
        /// RGBA pixel data.
        rgba_data: std::sync::Arc<Vec<u8>>,
        /// Frame width.
        width: u32,
        /// Frame height.
        height: u32,
        /// Presentation timestamp in seconds within the current loop.
        pts_secs: f64,
    },

    /// An error occurred.
    Error(String),
}

/// State of the clip playback subscription.
enum State {
    /// Waiting to start.
    Idle,

    /// Decoder is active and we have a command forwarder.
    Decoding {
        decoder: LoopingDecoder,
        external_cmd_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    },
}

/// Creates a clip playback subscription.
///
/// The subscription owns the decoder lifecycle and translates decoder
/// events into Iced messages. It first sends a `Started` message carrying a
/// [`DecoderCommandSender`]; the shell wraps that sender into the playback
/// surface it attaches to the controller.
///
/// Dropping the subscription (or the sender) disconnects the command
/// channel, which ends the decoder loop.
pub fn video_playback(clip_path: PathBuf) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with(ClipPlaybackId(clip_path), |id: &ClipPlaybackId| {
        let clip_path = id.0.clone();
        stream::channel(
            100,
            move |mut output: iced::futures::channel::mpsc::Sender<PlaybackMessage>| async move {
            let mut state = State::Idle;

            loop {
                match &mut state {
                    State::Idle => {
                        // External command channel for the UI side.
                        let (external_cmd_tx, external_cmd_rx) = mpsc::unbounded_channel();

                        let decoder = match LoopingDecoder::new(&clip_path) {
                            Ok(decoder) => decoder,
                            Err(e) => {
                                let _ = output.send(PlaybackMessage::Error(e.to_string())).await;
                                break;
                            }
                        };

                        let cmd_sender = DecoderCommandSender::new(external_cmd_tx);
                        let _ = output.send(PlaybackMessage::Started(cmd_sender)).await;

                        state = State::Decoding {
                            decoder,
                            external_cmd_rx,
                        };
                    }

                    State::Decoding {
                        decoder,
                        external_cmd_rx,
                    } => {
                        tokio::select! {
                            // Commands from the UI are forwarded to the decoder task.
                            cmd = external_cmd_rx.recv() => {
                                match cmd {
                                    Some(command) => {
                                        if decoder.send_command(command).is_err() {
                                            break;
                                        }
                                    }
                                    None => {
                                        // Surface detached: stop the decoder and end.
                                        let _ = decoder.send_command(DecoderCommand::Stop);
                                        break;
                                    }
                                }
                            }

                            event = decoder.recv_event() => {
                                match event {
                                    Some(DecoderEvent::FrameReady(frame)) => {
                                        let _ = output
                                            .send(PlaybackMessage::FrameReady {
                                                rgba_data: frame.rgba_data,
                                                width: frame.width,
                                                height: frame.height,
                                                pts_secs: frame.pts_secs,
                                            })
                                            .await;
                                    }
                                    Some(DecoderEvent::Error(msg)) => {
                                        let _ = output.send(PlaybackMessage::Error(msg)).await;
                                    }
                                    None => {
                                        // Decoder task ended.
                                        break;
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_sender_reports_closed_channel() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sender = DecoderCommandSender::new(tx);

        assert!(sender.send(DecoderCommand::Play).is_ok());
        drop(rx);
        assert!(sender.send(DecoderCommand::Pause).is_err());
    }
}
