// SPDX-License-Identifier: MPL-2.0
//! Static tour itinerary.
//!
//! The stops never change at runtime; the shell renders them as-is.
//! Display strings are Fluent keys so the card copy is localized.

/// One stop of the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStop {
    /// Emoji marker shown before the city name.
    pub marker: &'static str,
    /// Fluent key for the card heading (ordinal + city).
    pub name_key: &'static str,
    /// Fluent key for the one-line blurb.
    pub blurb_key: &'static str,
}

/// The itinerary, in visiting order.
pub const TOUR_STOPS: [TourStop; 3] = [
    TourStop {
        marker: "\u{1F5FC}", // Tokyo Tower
        name_key: "tour-stop-tokyo",
        blurb_key: "tour-stop-tokyo-blurb",
    },
    TourStop {
        marker: "\u{1F6A3}\u{200D}\u{2640}\u{FE0F}", // rowboat
        name_key: "tour-stop-yokosuka",
        blurb_key: "tour-stop-yokosuka-blurb",
    },
    TourStop {
        marker: "\u{1F341}", // maple leaf
        name_key: "tour-stop-canada",
        blurb_key: "tour-stop-canada-blurb",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itinerary_has_three_unique_stops() {
        assert_eq!(TOUR_STOPS.len(), 3);
        let mut keys: Vec<_> = TOUR_STOPS.iter().map(|s| s.name_key).collect();
        keys.dedup();
        assert_eq!(keys.len(), 3);
    }
}
