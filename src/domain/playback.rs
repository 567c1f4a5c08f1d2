// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for the highlight video.
//!
//! Two states, one trigger: a user toggle flips between them. The state
//! lives here, decoupled from any rendering mechanism, so the transition
//! logic is unit-testable without a GUI runtime.

/// Represents the current playback state of the highlight video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Video is paused. This is the state on every mount.
    #[default]
    Paused,
    /// Video is currently playing.
    Playing,
}

impl PlaybackState {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns the opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Paused => Self::Playing,
            Self::Playing => Self::Paused,
        }
    }
}
