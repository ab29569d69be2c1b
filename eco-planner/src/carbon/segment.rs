//! Per-segment emission calculation.

use crate::domain::{ScoredSegment, TransportSegment};

use super::factors::distance_factor;

/// Carbon emission of one segment in kg CO2e.
///
/// `distance * factor(mode, distance)`. Pure; zero distance gives zero.
pub fn segment_emissions(segment: &TransportSegment) -> f64 {
    segment.distance_km() * distance_factor(segment.mode(), segment.distance_km())
}

/// Computes a segment's emission and returns the enriched segment.
pub fn score_segment(segment: TransportSegment) -> ScoredSegment {
    let emission = segment_emissions(&segment);
    ScoredSegment::new(segment, emission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;

    fn seg(mode: TransportMode, km: f64) -> TransportSegment {
        TransportSegment::new(mode, km, 60.0, 0.0).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn car_100km() {
        assert_close(segment_emissions(&seg(TransportMode::Car, 100.0)), 21.0);
    }

    #[test]
    fn train_100km() {
        assert_close(segment_emissions(&seg(TransportMode::Train, 100.0)), 4.1);
    }

    #[test]
    fn short_flight_dirtier_per_km() {
        let short = seg(TransportMode::Plane, 400.0);
        let long = seg(TransportMode::Plane, 2000.0);

        let short_per_km = segment_emissions(&short) / 400.0;
        let long_per_km = segment_emissions(&long) / 2000.0;

        assert_close(short_per_km, 0.285);
        assert_close(long_per_km, 0.195);
        assert!(short_per_km > long_per_km);
    }

    #[test]
    fn zero_distance_is_zero() {
        for mode in TransportMode::ALL {
            assert_eq!(segment_emissions(&seg(mode, 0.0)), 0.0);
        }
    }

    #[test]
    fn active_modes_emit_nothing() {
        assert_eq!(segment_emissions(&seg(TransportMode::Walk, 3.0)), 0.0);
        assert_eq!(segment_emissions(&seg(TransportMode::Bike, 12.0)), 0.0);
    }

    #[test]
    fn score_segment_keeps_input() {
        let input = seg(TransportMode::Bus, 10.0).with_provider("Stagecoach");
        let scored = score_segment(input.clone());

        assert_eq!(scored.segment(), &input);
        assert_close(scored.carbon_emission(), 0.89);
    }
}
