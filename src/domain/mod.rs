// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types and business rules. It has no
//! dependencies on external crates (except `std`) to ensure testability
//! and architectural purity.
//!
//! # Modules
//!
//! - [`playback`]: Playback state machine ([`PlaybackState`](playback::PlaybackState))
//! - [`backdrop`]: Ambient backdrop cycle ([`AnimationCycleSpec`](backdrop::AnimationCycleSpec))
//! - [`tour`]: Static tour itinerary ([`TourStop`](tour::TourStop))

pub mod backdrop;
pub mod playback;
pub mod tour;
