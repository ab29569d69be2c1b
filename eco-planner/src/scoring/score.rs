//! Sustainability scoring.
//!
//! A route's score combines four sub-scores, each on a 0-100 scale:
//!
//! - **carbon**: footprint per km relative to a standard car (car = 0,
//!   zero emission = 100)
//! - **mode efficiency**, **renewable energy**, **congestion reduction**:
//!   distance-weighted averages of the per-mode tables
//!
//! The weighted sum is rounded and clamped to `0..=100`. Scoring is a pure
//! function of the segments.

use crate::carbon::CAR_BASE_FACTOR;
use crate::domain::{RouteTotals, ScoredSegment, TransportMode};

use super::config::{ScoringConfig, ScoringWeights};
use super::tables::{congestion_reduction, mode_efficiency, renewable_energy};

/// Sub-scores behind a route's sustainability score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SustainabilityBreakdown {
    pub carbon: f64,
    pub mode_efficiency: f64,
    pub renewable_energy: f64,
    pub congestion_reduction: f64,
    /// Final weighted score, rounded and clamped.
    pub score: u8,
}

/// Carbon sub-score from route totals.
///
/// `100 - (carbon_per_km / car_factor) * 100`, clamped to `0..=100`.
/// A route with no distance counts as zero emission per km.
pub fn carbon_score(totals: &RouteTotals) -> f64 {
    let per_km = if totals.distance_km > 0.0 {
        totals.carbon_kg / totals.distance_km
    } else {
        0.0
    };
    (100.0 - (per_km / CAR_BASE_FACTOR) * 100.0).clamp(0.0, 100.0)
}

/// Distance-weighted average of a per-mode table over the segments.
///
/// Returns 0 when the segments cover no distance. Clamped to `0..=100`
/// so float error can't push an all-100 route over the top.
pub fn distance_weighted(segments: &[ScoredSegment], table: fn(TransportMode) -> f64) -> f64 {
    let total_distance: f64 = segments.iter().map(|s| s.distance_km()).sum();
    if total_distance <= 0.0 {
        return 0.0;
    }

    // Weight by share of distance; `score * km` overflows for huge legs
    let weighted: f64 = segments
        .iter()
        .map(|s| table(s.mode()) * (s.distance_km() / total_distance))
        .sum();
    weighted.clamp(0.0, 100.0)
}

/// Weighted sum of sub-scores, rounded and clamped.
fn combine(weights: &ScoringWeights, sub_scores: [f64; 4]) -> u8 {
    let [carbon, efficiency, renewable, congestion] = sub_scores;
    let total = weights.carbon * carbon
        + weights.mode_efficiency * efficiency
        + weights.renewable_energy * renewable
        + weights.congestion_reduction * congestion;

    // `as` saturates, and NaN becomes 0
    total.round().clamp(0.0, 100.0) as u8
}

/// Computes all sub-scores and the final score.
pub fn sustainability_breakdown(
    segments: &[ScoredSegment],
    totals: &RouteTotals,
    config: &ScoringConfig,
) -> SustainabilityBreakdown {
    let carbon = carbon_score(totals);
    let efficiency = distance_weighted(segments, mode_efficiency);
    let renewable = distance_weighted(segments, renewable_energy);
    let congestion = distance_weighted(segments, congestion_reduction);

    SustainabilityBreakdown {
        carbon,
        mode_efficiency: efficiency,
        renewable_energy: renewable,
        congestion_reduction: congestion,
        score: combine(&config.weights, [carbon, efficiency, renewable, congestion]),
    }
}

/// Final 0-100 score for a list of scored segments.
pub fn sustainability_score(
    segments: &[ScoredSegment],
    totals: &RouteTotals,
    config: &ScoringConfig,
) -> u8 {
    sustainability_breakdown(segments, totals, config).score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carbon::{aggregate, score_segment};
    use crate::domain::TransportSegment;

    fn scored(legs: &[(TransportMode, f64)]) -> (Vec<ScoredSegment>, RouteTotals) {
        let segments: Vec<ScoredSegment> = legs
            .iter()
            .map(|&(mode, km)| score_segment(TransportSegment::new(mode, km, 10.0, 0.0).unwrap()))
            .collect();
        let totals = aggregate(&segments).unwrap();
        (segments, totals)
    }

    fn breakdown(legs: &[(TransportMode, f64)]) -> SustainabilityBreakdown {
        let (segments, totals) = scored(legs);
        sustainability_breakdown(&segments, &totals, &ScoringConfig::default())
    }

    #[test]
    fn car_scores_zero_on_carbon() {
        let b = breakdown(&[(TransportMode::Car, 100.0)]);

        assert!(b.carbon.abs() < 1e-9);
        assert_eq!(b.mode_efficiency, 20.0);
        assert_eq!(b.renewable_energy, 10.0);
        assert_eq!(b.congestion_reduction, 0.0);
        // 0.2 * 20 + 0.1 * 10 = 5
        assert_eq!(b.score, 5);
    }

    #[test]
    fn train_route() {
        let b = breakdown(&[(TransportMode::Train, 100.0)]);

        // 100 - (0.041 / 0.21) * 100 = 80.476...
        assert!((b.carbon - 80.476_190_476).abs() < 1e-6);
        // 0.6 * 80.476 + 0.2 * 90 + 0.1 * 80 + 0.1 * 90 = 83.29
        assert_eq!(b.score, 83);
    }

    #[test]
    fn walking_scores_full_marks() {
        let b = breakdown(&[(TransportMode::Walk, 4.0), (TransportMode::Bike, 6.0)]);

        assert_eq!(b.carbon, 100.0);
        assert_eq!(b.score, 100);
    }

    #[test]
    fn zero_distance_route() {
        let b = breakdown(&[(TransportMode::Car, 0.0)]);

        assert_eq!(b.carbon, 100.0);
        assert_eq!(b.mode_efficiency, 0.0);
        assert_eq!(b.renewable_energy, 0.0);
        assert_eq!(b.congestion_reduction, 0.0);
        assert_eq!(b.score, 60);
    }

    #[test]
    fn domestic_flight_clamps_carbon() {
        // 0.285 per km is worse than the car, so carbon floors at 0
        let b = breakdown(&[(TransportMode::Plane, 400.0)]);
        assert_eq!(b.carbon, 0.0);
    }

    #[test]
    fn distance_weighting() {
        let (segments, _) = scored(&[(TransportMode::Train, 80.0), (TransportMode::Car, 20.0)]);

        // (90 * 80 + 20 * 20) / 100
        assert!((distance_weighted(&segments, mode_efficiency) - 76.0).abs() < 1e-9);
        // (90 * 80 + 0 * 20) / 100
        assert!((distance_weighted(&segments, congestion_reduction) - 72.0).abs() < 1e-9);
    }

    #[test]
    fn huge_leg_stays_in_bounds() {
        let b = breakdown(&[(TransportMode::Car, 1e308)]);

        assert!(b.carbon.abs() < 1e-9);
        assert_eq!(b.mode_efficiency, 20.0);
        assert_eq!(b.renewable_energy, 10.0);
        assert_eq!(b.congestion_reduction, 0.0);
        assert_eq!(b.score, 5);
    }

    #[test]
    fn shorter_flight_scores_no_higher() {
        let short = breakdown(&[(TransportMode::Plane, 1000.0)]);
        let long = breakdown(&[(TransportMode::Plane, 2000.0)]);

        assert!(short.carbon < long.carbon);
        assert!(short.score <= long.score);
    }

    #[test]
    fn custom_weights_change_score() {
        let (segments, totals) = scored(&[(TransportMode::Bus, 50.0)]);
        let carbon_only = ScoringConfig::new(ScoringWeights::new(1.0, 0.0, 0.0, 0.0));

        let b = sustainability_breakdown(&segments, &totals, &carbon_only);
        assert_eq!(b.score, b.carbon.round() as u8);
    }

    #[test]
    fn combine_clamps() {
        let weights = ScoringWeights::default();
        assert_eq!(combine(&weights, [100.0; 4]), 100);
        assert_eq!(combine(&weights, [0.0; 4]), 0);
        assert_eq!(combine(&weights, [f64::NAN; 4]), 0);
    }
}
