// SPDX-License-Identifier: MPL-2.0
//! Ambient backdrop driver and its canvas wash.
//!
//! [`Backdrop`] brackets the perpetual paint-splash animation with explicit
//! `start`/`stop`, so teardown cancels the cycle instead of leaving a timer
//! running. Frames arrive as `Tick` messages from a subscription that the
//! app only keeps alive while the driver is running; the driver converts
//! elapsed time into a cycle phase and the [`Wash`] canvas paints it.

use crate::domain::backdrop::{AnimationCycleSpec, BACKDROP_CYCLE};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::time::Instant;

/// Drives the repeating backdrop cycle.
///
/// Holds no per-frame visual state beyond the current phase; the cycle
/// itself is the compile-time [`BACKDROP_CYCLE`] constant. No user input
/// reaches this type.
#[derive(Debug)]
pub struct Backdrop {
    spec: AnimationCycleSpec,
    started_at: Option<Instant>,
    phase: f32,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Backdrop {
    /// Creates a stopped driver showing the cycle's initial frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spec: BACKDROP_CYCLE,
            started_at: None,
            phase: 0.0,
        }
    }

    /// Begins the infinite cycle. Invoked once at mount.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.phase = 0.0;
    }

    /// Halts the cycle. Invoked at teardown; ticks received afterwards are
    /// ignored, so no frame advances past this point.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Returns true while the cycle is running.
    ///
    /// The app gates the tick subscription on this, which is what makes
    /// `stop()` an actual cancellation rather than a request.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Advances the cycle to the phase corresponding to `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at {
            self.phase = self.spec.phase(now.duration_since(started_at));
        }
    }

    /// Current phase in `[0.0, 1.0)`. The initial frame is phase zero.
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Renders the wash for the current phase.
    pub fn view<Message: 'static>(&self) -> iced::Element<'static, Message> {
        Wash::new(self.spec, self.phase).into_element()
    }
}

/// Canvas program painting the backdrop wash.
///
/// The radial gradient of the cycle spec is approximated by layered
/// translucent discs, outermost stop first.
struct Wash {
    cache: Cache,
    spec: AnimationCycleSpec,
    phase: f32,
}

impl Wash {
    fn new(spec: AnimationCycleSpec, phase: f32) -> Self {
        Self {
            cache: Cache::default(),
            spec,
            phase,
        }
    }

    /// Creates a full-size Canvas widget from this wash.
    fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for Wash {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let opacity = self.spec.opacity_at(self.phase);

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                if opacity <= f32::EPSILON {
                    return;
                }

                let center = Point::new(frame.width() / 2.0, frame.height() / 2.0);
                let max_radius = frame.width().hypot(frame.height()) / 2.0;

                // Outermost stop covers everything; inner stops layer on top
                // with shrinking radii. A zero-position stop still gets a
                // small core disc so the gradient center stays visible.
                for stop in self.spec.stops.iter().rev() {
                    let [r, g, b, a] = stop.rgba;
                    let color = Color::from_rgba(r, g, b, a * opacity);
                    let radius = max_radius * stop.position.max(0.18);
                    frame.fill(&Path::circle(center, radius), color);
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn starts_stopped_at_initial_frame() {
        let backdrop = Backdrop::new();
        assert!(!backdrop.is_running());
        assert_eq!(backdrop.phase(), 0.0);
    }

    #[test]
    fn tick_advances_phase_while_running() {
        let mut backdrop = Backdrop::new();
        let t0 = Instant::now();
        backdrop.start(t0);

        backdrop.tick(t0 + Duration::from_millis(2500));
        assert!((backdrop.phase() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn cycle_wraps_instead_of_terminating() {
        let mut backdrop = Backdrop::new();
        let t0 = Instant::now();
        backdrop.start(t0);

        // Hundreds of cycles later the driver is still running and in range.
        backdrop.tick(t0 + Duration::from_secs(5 * 400 + 1));
        assert!(backdrop.is_running());
        assert!((0.0..1.0).contains(&backdrop.phase()));
    }

    #[test]
    fn ticks_after_stop_do_not_advance() {
        let mut backdrop = Backdrop::new();
        let t0 = Instant::now();
        backdrop.start(t0);
        backdrop.tick(t0 + Duration::from_millis(1000));
        let frozen = backdrop.phase();

        backdrop.stop();
        backdrop.tick(t0 + Duration::from_millis(4000));

        assert!(!backdrop.is_running());
        assert_eq!(backdrop.phase(), frozen);
    }

    #[test]
    fn restart_rewinds_to_initial_frame() {
        let mut backdrop = Backdrop::new();
        let t0 = Instant::now();
        backdrop.start(t0);
        backdrop.tick(t0 + Duration::from_millis(2000));
        backdrop.stop();

        backdrop.start(t0 + Duration::from_secs(10));
        assert_eq!(backdrop.phase(), 0.0);
    }
}
