// SPDX-License-Identifier: MPL-2.0
//! Ambient backdrop cycle description.
//!
//! The backdrop is a perpetual paint-splash wash behind the page: a fixed
//! set of opacity keyframes played over a fixed duration, repeating forever
//! from the first keyframe. The spec is a compile-time constant; nothing
//! mutates it and no input can seek or pause the cycle.

use std::time::Duration;

/// A color stop of the backdrop wash, positioned along its radius.
///
/// Colors are linear RGBA components in `0.0..=1.0`; `position` is the
/// normalized distance from the center (`0.0` = center, `1.0` = edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WashStop {
    pub rgba: [f32; 4],
    pub position: f32,
}

/// Immutable description of one repeat of the backdrop animation.
///
/// Keyframes are evenly spaced across [`duration`](Self::duration) and
/// interpolated linearly. When the cycle completes it jumps back to the
/// first keyframe (a hard repeat, not a ping-pong).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationCycleSpec {
    /// Length of one repeat.
    pub duration: Duration,
    /// Overall wash opacity at each evenly spaced keyframe.
    pub opacity_keyframes: [f32; 4],
    /// Radial color stops of the wash, center outwards.
    pub stops: [WashStop; 3],
}

/// The one and only backdrop cycle: a five second magenta/cyan/yellow
/// wash fading between subtle opacity levels.
pub const BACKDROP_CYCLE: AnimationCycleSpec = AnimationCycleSpec {
    duration: Duration::from_secs(5),
    opacity_keyframes: [0.0, 0.3, 0.1, 0.2],
    stops: [
        WashStop {
            rgba: [1.0, 0.0, 0.59, 0.3],
            position: 0.0,
        },
        WashStop {
            rgba: [0.0, 1.0, 1.0, 0.2],
            position: 0.5,
        },
        WashStop {
            rgba: [1.0, 1.0, 0.0, 0.1],
            position: 1.0,
        },
    ],
};

impl AnimationCycleSpec {
    /// Maps elapsed time since `start()` to a phase in `[0.0, 1.0)`,
    /// wrapping at every completed repeat.
    #[must_use]
    pub fn phase(&self, elapsed: Duration) -> f32 {
        let cycle_secs = self.duration.as_secs_f64();
        let phase = (elapsed.as_secs_f64() / cycle_secs).fract();
        phase as f32
    }

    /// Returns the wash opacity at the given phase.
    ///
    /// Keyframes are evenly spaced; values between them are linearly
    /// interpolated. The phase wraps, so `1.0` is equivalent to `0.0`.
    #[must_use]
    pub fn opacity_at(&self, phase: f32) -> f32 {
        let phase = phase.rem_euclid(1.0);
        let segments = (self.opacity_keyframes.len() - 1) as f32;
        let scaled = phase * segments;
        let index = (scaled.floor() as usize).min(self.opacity_keyframes.len() - 2);
        let t = scaled - index as f32;

        let from = self.opacity_keyframes[index];
        let to = self.opacity_keyframes[index + 1];
        from + (to - from) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_every_cycle() {
        let spec = BACKDROP_CYCLE;
        assert_eq!(spec.phase(Duration::ZERO), 0.0);
        assert!((spec.phase(Duration::from_millis(2500)) - 0.5).abs() < 1e-6);
        // A full cycle plus half wraps to half.
        assert!((spec.phase(Duration::from_millis(7500)) - 0.5).abs() < 1e-6);
        // Many cycles later it still wraps.
        assert!(spec.phase(Duration::from_secs(5 * 1000)) < 1e-6);
    }

    #[test]
    fn opacity_hits_keyframes() {
        let spec = BACKDROP_CYCLE;
        assert!((spec.opacity_at(0.0) - 0.0).abs() < 1e-6);
        assert!((spec.opacity_at(1.0 / 3.0) - 0.3).abs() < 1e-6);
        assert!((spec.opacity_at(2.0 / 3.0) - 0.1).abs() < 1e-6);
        assert!((spec.opacity_at(1.0) - 0.0).abs() < 1e-6); // wrapped
    }

    #[test]
    fn opacity_interpolates_between_keyframes() {
        let spec = BACKDROP_CYCLE;
        // Halfway through the first segment: between 0.0 and 0.3.
        let mid = spec.opacity_at(1.0 / 6.0);
        assert!((mid - 0.15).abs() < 1e-6);
    }

    #[test]
    fn opacity_stays_in_declared_range() {
        let spec = BACKDROP_CYCLE;
        for i in 0..=100 {
            let phase = i as f32 / 100.0;
            let opacity = spec.opacity_at(phase);
            assert!((0.0..=0.3).contains(&opacity), "phase {phase}: {opacity}");
        }
    }

    #[test]
    fn stops_are_ordered_center_outwards() {
        let stops = BACKDROP_CYCLE.stops;
        assert!(stops.windows(2).all(|w| w[0].position < w[1].position));
    }
}
