// SPDX-License-Identifier: MPL-2.0
//! Play/pause control for the highlight video.
//!
//! The [`Controller`] owns the two-state playback model and drives whatever
//! [`MediaSurface`] the shell has attached. The surface is a non-owning,
//! possibly-absent capability: before the decoder reports in, toggling is a
//! silent no-op.

mod controller;
mod surface;

pub use controller::Controller;
pub use surface::{MediaSurface, VideoSurface};
