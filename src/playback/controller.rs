// SPDX-License-Identifier: MPL-2.0
//! The play/pause toggle state machine.

use super::MediaSurface;
use crate::domain::playback::PlaybackState;

/// Drives an externally attached media surface between Paused and Playing.
///
/// The controller holds the only mutable copy of [`PlaybackState`]. The
/// state flips exactly when the corresponding command has been issued to
/// the surface, never in anticipation of it; with no surface attached the
/// state does not move at all.
///
/// Whether the surface actually honors a command is not tracked. A clip
/// that fails to start still shows as Playing; the control is cosmetic and
/// accepts that looseness.
#[derive(Debug, Default)]
pub struct Controller<S: MediaSurface> {
    state: PlaybackState,
    surface: Option<S>,
}

impl<S: MediaSurface> Controller<S> {
    /// Creates a controller with no surface attached, in the Paused state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Paused,
            surface: None,
        }
    }

    /// Attaches the media surface the controller will drive.
    ///
    /// Attaching resets the state to Paused: a freshly mounted resource is
    /// never assumed to be playing.
    pub fn attach(&mut self, surface: S) {
        self.surface = Some(surface);
        self.state = PlaybackState::Paused;
    }

    /// Releases the surface and resets the state to Paused.
    ///
    /// Dropping the surface is the unmount path; for the channel-backed
    /// production surface this disconnects the decoder loop.
    pub fn detach(&mut self) {
        self.surface = None;
        self.state = PlaybackState::Paused;
    }

    /// Returns true if a surface is currently attached.
    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Flips between Paused and Playing, issuing the matching command.
    ///
    /// With no surface attached this is a no-op: no command is issued and
    /// the state is unchanged.
    pub fn toggle(&mut self) {
        let Some(surface) = &mut self.surface else {
            return;
        };

        match self.state {
            PlaybackState::Paused => surface.play(),
            PlaybackState::Playing => surface.pause(),
        }
        self.state = self.state.toggled();
    }

    /// Returns the current playback state. Pure read, no side effects.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test surface that records every command it receives.
    #[derive(Debug, Clone, Default)]
    struct RecordingSurface {
        commands: Rc<RefCell<Vec<&'static str>>>,
    }

    impl RecordingSurface {
        fn commands(&self) -> Vec<&'static str> {
            self.commands.borrow().clone()
        }
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
    fn starts_paused_with_no_surface() {
        let controller = Controller::<RecordingSurface>::new();
        assert_eq!(controller.state(), PlaybackState::Paused);
        assert!(!controller.has_surface());
    }

    #[test]
    fn toggle_without_surface_is_a_no_op() {
        let mut controller = Controller::<RecordingSurface>::new();

        controller.toggle();
        controller.toggle();
        controller.toggle();

        assert_eq!(controller.state(), PlaybackState::Paused);
    }

    #[test]
    fn toggle_from_paused_issues_play_then_flips() {
        let surface = RecordingSurface::default();
        let mut controller = Controller::new();
        controller.attach(surface.clone());

        controller.toggle();

        assert_eq!(controller.state(), PlaybackState::Playing);
        assert_eq!(surface.commands(), ["play"]);
    }

    #[test]
    fn second_toggle_issues_pause_and_returns_to_paused() {
        let surface = RecordingSurface::default();
        let mut controller = Controller::new();
        controller.attach(surface.clone());

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.state(), PlaybackState::Paused);
        assert_eq!(surface.commands(), ["play", "pause"]);
    }

    #[test]
    fn double_toggle_from_playing_issues_pause_then_play() {
        let surface = RecordingSurface::default();
        let mut controller = Controller::new();
        controller.attach(surface.clone());
        controller.toggle(); // reach Playing

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.state(), PlaybackState::Playing);
        assert_eq!(surface.commands(), ["play", "pause", "play"]);
    }

    #[test]
    fn attach_resets_state_to_paused() {
        let mut controller = Controller::new();
        controller.attach(RecordingSurface::default());
        controller.toggle();
        assert_eq!(controller.state(), PlaybackState::Playing);

        controller.attach(RecordingSurface::default());
        assert_eq!(controller.state(), PlaybackState::Paused);
    }

    #[test]
    fn detach_releases_surface_and_resets() {
        let surface = RecordingSurface::default();
        let mut controller = Controller::new();
        controller.attach(surface.clone());
        controller.toggle();

        controller.detach();

        assert!(!controller.has_surface());
        assert_eq!(controller.state(), PlaybackState::Paused);

        // Toggling after detach issues nothing further.
        controller.toggle();
        assert_eq!(surface.commands(), ["play"]);
    }
}
