// SPDX-License-Identifier: MPL-2.0
//! Async looping video decoder using FFmpeg.
//!
//! Decodes the highlight clip on a blocking thread, delivering frames
//! through channels for non-blocking UI updates. End of stream rewinds to
//! the start instead of stopping, so the clip loops until paused.

use crate::error::{Error, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,

    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Presentation timestamp in seconds within the current loop.
    pub pts_secs: f64,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone)]
pub enum DecoderCommand {
    /// Resume decoding and sending frames.
    Play,

    /// Pause decoding (stop sending frames, keep position).
    Pause,

    /// Stop decoding and clean up resources.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// An error occurred during decoding.
    Error(String),
}

/// Async looping decoder that runs in a Tokio blocking task.
pub struct LoopingDecoder {
    /// Channel for sending commands to the decoder task.
    command_tx: mpsc::UnboundedSender<DecoderCommand>,

    /// Channel for receiving events from the decoder task.
    /// Bounded so a slow UI applies backpressure instead of accumulating frames.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl LoopingDecoder {
    /// Creates a new looping decoder for the given clip.
    ///
    /// Spawns a blocking task that owns the FFmpeg state and waits paused
    /// for the first `Play` command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist. Decode failures after
    /// startup are reported through [`DecoderEvent::Error`].
    pub fn new<P: AsRef<Path>>(clip_path: P) -> Result<Self> {
        let path = clip_path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(Error::Io(format!("Clip not found: {:?}", path)));
        }

        // Commands: unbounded (UI must never block).
        // Events: capacity 2 keeps at most a frame of lead over the UI.
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg types are not Send, so the whole loop lives on one blocking thread.
        // Setup failures (unreadable clip, no video stream, codec or scaler
        // creation) surface through the event channel like decode failures do.
        tokio::task::spawn_blocking(move || {
            if let Err(e) = Self::decoder_loop_blocking(path, command_rx, event_tx.clone()) {
                let _ = event_tx.blocking_send(DecoderEvent::Error(e.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Video("Decoder task is not running".into()))
    }

    /// Receives the next event from the decoder (blocking).
    ///
    /// Returns `None` if the decoder task has terminated.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    /// Main decoder loop running in a blocking thread.
    ///
    /// Maintains play/pause state, paces frames by their PTS, and rewinds
    /// to the first frame whenever the demuxer runs out of packets.
    fn decoder_loop_blocking(
        clip_path: std::path::PathBuf,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<DecoderEvent>,
    ) -> Result<()> {
        super::init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(&clip_path)
            .map_err(|e| Error::Video(format!("Failed to open clip: {e}")))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| Error::Video("No video stream found".to_string()))?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| Error::Video(format!("Failed to create codec context: {e}")))?;
        let mut decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| Error::Video(format!("Failed to create video decoder: {e}")))?;

        let width = decoder.width();
        let height = decoder.height();

        // Scaler converts whatever the codec outputs to RGBA for Iced.
        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| Error::Video(format!("Failed to create scaler: {e}")))?;

        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        // Playback state: paused until the first Play command arrives.
        let mut is_playing = false;
        let mut playback_start_time: Option<std::time::Instant> = None;
        let mut first_pts: Option<f64> = None;

        loop {
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    is_playing = true;
                    playback_start_time = Some(std::time::Instant::now());
                    first_pts = None;
                }
                Ok(DecoderCommand::Pause) => {
                    // Keep demuxer position so Play resumes where we stopped.
                    is_playing = false;
                    playback_start_time = None;
                    first_pts = None;
                }
                Ok(DecoderCommand::Stop) => {
                    break;
                }
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    // UI side dropped its sender: tear down.
                    break;
                }
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            // While paused, yield instead of busy-waiting on the channel.
            if !is_playing {
                std::thread::sleep(std::time::Duration::from_millis(10));
                continue;
            }

            // Decode the next frame.
            let mut frame_decoded = false;
            for (stream, packet) in ictx.packets() {
                if stream.index() != video_stream_index {
                    continue;
                }

                if let Err(e) = decoder.send_packet(&packet) {
                    let _ = event_tx
                        .blocking_send(DecoderEvent::Error(format!("Packet send failed: {e}")));
                    continue;
                }

                let mut decoded_frame = ffmpeg_next::frame::Video::empty();
                if decoder.receive_frame(&mut decoded_frame).is_ok() {
                    let mut rgba_frame = ffmpeg_next::frame::Video::empty();
                    if let Err(e) = scaler.run(&decoded_frame, &mut rgba_frame) {
                        let _ = event_tx
                            .blocking_send(DecoderEvent::Error(format!("Scaling failed: {e}")));
                        continue;
                    }

                    let rgba_data = Self::extract_rgba_data(&rgba_frame);

                    let pts_secs = decoded_frame
                        .timestamp()
                        .map_or(0.0, |pts| pts as f64 * time_base_f64);

                    // Frame pacing: wait until the frame should be displayed.
                    if let Some(start_time) = playback_start_time {
                        if first_pts.is_none() {
                            first_pts = Some(pts_secs);
                        }

                        if let Some(first) = first_pts {
                            let frame_delay = pts_secs - first;
                            let target_time =
                                start_time + std::time::Duration::from_secs_f64(frame_delay.max(0.0));
                            let now = std::time::Instant::now();

                            if target_time > now {
                                std::thread::sleep(target_time - now);
                            }
                        }
                    }

                    let decoded = DecodedFrame {
                        rgba_data: Arc::new(rgba_data),
                        width,
                        height,
                        pts_secs,
                    };

                    if event_tx
                        .blocking_send(DecoderEvent::FrameReady(decoded))
                        .is_err()
                    {
                        // Event channel closed; subscription is gone.
                        return Ok(());
                    }

                    frame_decoded = true;
                    break;
                }
            }

            // Out of packets: rewind to the first frame and keep playing.
            // The highlight clip loops forever by design.
            if !frame_decoded {
                if let Err(e) = ictx.seek(0, ..0) {
                    let _ =
                        event_tx.blocking_send(DecoderEvent::Error(format!("Loop rewind failed: {e}")));
                    is_playing = false;
                    continue;
                }
                decoder.flush();
                playback_start_time = Some(std::time::Instant::now());
                first_pts = None;
            }
        }

        Ok(())
    }

    /// Extracts RGBA data from a decoded frame, handling stride correctly.
    fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
        let width = frame.width();
        let height = frame.height();
        let data = frame.data(0);
        let stride = frame.stride(0);

        let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            let row_start = (y * stride as u32) as usize;
            let row_end = row_start + (width * 4) as usize;
            rgba_bytes.extend_from_slice(&data[row_start..row_end]);
        }

        rgba_bytes
    }
}
