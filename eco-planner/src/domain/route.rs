//! Route types.
//!
//! A `RouteOption` is a complete, scored trip: its segments, the totals
//! derived from them, and the sustainability score. It can only be built
//! by scoring a list of segments, so totals never disagree with segments.

use crate::carbon::{aggregate, score_segment};
use crate::scoring::{ScoringConfig, SustainabilityBreakdown, sustainability_breakdown};

use super::{DomainError, ScoredSegment, TransportMode, TransportSegment};

/// Route-level sums over all segments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteTotals {
    /// Total distance in km
    pub distance_km: f64,
    /// Total duration in minutes
    pub duration_mins: f64,
    /// Total cost
    pub cost: f64,
    /// Total footprint in kg CO2e
    pub carbon_kg: f64,
}

/// A scored route option.
///
/// # Invariants
///
/// - At least one segment
/// - `totals` are the sums of the segment fields
/// - `sustainability_score` is in `0..=100`
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOption {
    id: Option<String>,
    segments: Vec<ScoredSegment>,
    totals: RouteTotals,
    breakdown: SustainabilityBreakdown,
}

impl RouteOption {
    /// Scores a list of segments into a route.
    ///
    /// Every segment's emission is recomputed from its mode and distance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRoute` if `segments` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use eco_planner::domain::{RouteOption, TransportMode, TransportSegment};
    /// use eco_planner::scoring::ScoringConfig;
    ///
    /// let train = TransportSegment::new(TransportMode::Train, 100.0, 60.0, 20.0).unwrap();
    /// let route = RouteOption::score(None, vec![train], &ScoringConfig::default()).unwrap();
    ///
    /// assert!((route.totals().carbon_kg - 4.1).abs() < 1e-9);
    /// assert!(route.sustainability_score() > 50);
    /// ```
    pub fn score(
        id: Option<String>,
        segments: Vec<TransportSegment>,
        config: &ScoringConfig,
    ) -> Result<Self, DomainError> {
        let segments: Vec<ScoredSegment> = segments.into_iter().map(score_segment).collect();
        let totals = aggregate(&segments)?;
        let breakdown = sustainability_breakdown(&segments, &totals, config);

        Ok(Self {
            id,
            segments,
            totals,
            breakdown,
        })
    }

    /// Caller-supplied identifier, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns all segments in travel order.
    pub fn segments(&self) -> &[ScoredSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn totals(&self) -> &RouteTotals {
        &self.totals
    }

    /// The final 0-100 score. Higher is more sustainable.
    pub fn sustainability_score(&self) -> u8 {
        self.breakdown.score
    }

    /// The sub-scores behind the final score.
    pub fn breakdown(&self) -> &SustainabilityBreakdown {
        &self.breakdown
    }

    /// Distinct modes in the order they are first used.
    pub fn modes(&self) -> Vec<TransportMode> {
        let mut modes = Vec::new();
        for segment in &self.segments {
            if !modes.contains(&segment.mode()) {
                modes.push(segment.mode());
            }
        }
        modes
    }

    /// Footprint per km, or 0 when the route covers no distance.
    pub fn carbon_per_km(&self) -> f64 {
        if self.totals.distance_km > 0.0 {
            self.totals.carbon_kg / self.totals.distance_km
        } else {
            0.0
        }
    }

    /// Returns true if no segment emits anything.
    pub fn is_zero_emission(&self) -> bool {
        self.totals.carbon_kg == 0.0
    }
}
