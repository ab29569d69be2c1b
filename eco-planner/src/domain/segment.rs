//! Transport segment types.
//!
//! A `TransportSegment` is one leg of a route as supplied by the caller.
//! A `ScoredSegment` is the same leg with its carbon emission computed.
//! Emissions are never stored on the input type, so a segment can't carry
//! a stale value after its distance changes.

use super::error::non_negative;
use super::{DomainError, TransportMode};

/// Descriptive public-transit metadata for a segment.
///
/// Carried through scoring untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitDetails {
    /// Line or route name (e.g., "Elizabeth line")
    pub line: Option<String>,
    /// Operating agency
    pub agency: Option<String>,
    /// Boarding stop name
    pub departure_stop: Option<String>,
    /// Alighting stop name
    pub arrival_stop: Option<String>,
    /// Number of intermediate stops
    pub num_stops: Option<u32>,
}

/// One leg of a journey.
///
/// # Invariants
///
/// - `distance_km`, `duration_mins` and `cost` are finite and non-negative
/// - `mode` never changes after construction
#[derive(Debug, Clone, PartialEq)]
pub struct TransportSegment {
    mode: TransportMode,
    distance_km: f64,
    duration_mins: f64,
    cost: f64,
    provider: Option<String>,
    transit_details: Option<TransitDetails>,
}

impl TransportSegment {
    /// Constructs a segment, validating its quantities.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any quantity is negative, NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use eco_planner::domain::{TransportMode, TransportSegment};
    ///
    /// let seg = TransportSegment::new(TransportMode::Train, 100.0, 55.0, 24.0).unwrap();
    /// assert_eq!(seg.distance_km(), 100.0);
    ///
    /// assert!(TransportSegment::new(TransportMode::Car, -1.0, 10.0, 0.0).is_err());
    /// ```
    pub fn new(
        mode: TransportMode,
        distance_km: f64,
        duration_mins: f64,
        cost: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            mode,
            distance_km: non_negative("distance", distance_km)?,
            duration_mins: non_negative("duration", duration_mins)?,
            cost: non_negative("cost", cost)?,
            provider: None,
            transit_details: None,
        })
    }

    /// Attaches a provider name.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Attaches transit metadata.
    pub fn with_transit_details(mut self, details: TransitDetails) -> Self {
        self.transit_details = Some(details);
        self
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_mins(&self) -> f64 {
        self.duration_mins
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn transit_details(&self) -> Option<&TransitDetails> {
        self.transit_details.as_ref()
    }
}

/// A segment with its carbon emission computed.
///
/// Only built by [`crate::carbon::score_segment`], so `carbon_emission`
/// always matches the segment's mode and distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSegment {
    segment: TransportSegment,
    carbon_emission: f64,
}

impl ScoredSegment {
    pub(crate) fn new(segment: TransportSegment, carbon_emission: f64) -> Self {
        Self {
            segment,
            carbon_emission,
        }
    }

    /// Returns the underlying input segment.
    pub fn segment(&self) -> &TransportSegment {
        &self.segment
    }

    /// Emission for this leg in kg CO2e.
    pub fn carbon_emission(&self) -> f64 {
        self.carbon_emission
    }

    pub fn mode(&self) -> TransportMode {
        self.segment.mode
    }

    pub fn distance_km(&self) -> f64 {
        self.segment.distance_km
    }

    pub fn duration_mins(&self) -> f64 {
        self.segment.duration_mins
    }

    pub fn cost(&self) -> f64 {
        self.segment.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_segment() {
        let seg = TransportSegment::new(TransportMode::Bus, 12.0, 30.0, 2.5).unwrap();

        assert_eq!(seg.mode(), TransportMode::Bus);
        assert_eq!(seg.distance_km(), 12.0);
        assert_eq!(seg.duration_mins(), 30.0);
        assert_eq!(seg.cost(), 2.5);
        assert!(seg.provider().is_none());
        assert!(seg.transit_details().is_none());
    }

    #[test]
    fn zero_quantities_allowed() {
        assert!(TransportSegment::new(TransportMode::Walk, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn reject_negative_fields() {
        let err = TransportSegment::new(TransportMode::Car, -5.0, 10.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::NegativeValue {
                field: "distance",
                value: -5.0
            }
        );

        let err = TransportSegment::new(TransportMode::Car, 5.0, -10.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NegativeValue {
                field: "duration",
                ..
            }
        ));

        let err = TransportSegment::new(TransportMode::Car, 5.0, 10.0, -1.0).unwrap_err();
        assert!(matches!(err, DomainError::NegativeValue { field: "cost", .. }));
    }

    #[test]
    fn reject_non_finite() {
        let err = TransportSegment::new(TransportMode::Train, f64::NAN, 10.0, 1.0).unwrap_err();
        assert_eq!(err, DomainError::NonFiniteValue { field: "distance" });
    }

    #[test]
    fn metadata_builders() {
        let details = TransitDetails {
            line: Some("Northern".into()),
            num_stops: Some(4),
            ..Default::default()
        };
        let seg = TransportSegment::new(TransportMode::Metro, 6.0, 14.0, 2.8)
            .unwrap()
            .with_provider("TfL")
            .with_transit_details(details.clone());

        assert_eq!(seg.provider(), Some("TfL"));
        assert_eq!(seg.transit_details(), Some(&details));
    }

    #[test]
    fn scored_segment_accessors() {
        let seg = TransportSegment::new(TransportMode::Car, 10.0, 12.0, 3.0).unwrap();
        let scored = ScoredSegment::new(seg.clone(), 2.1);

        assert_eq!(scored.mode(), TransportMode::Car);
        assert_eq!(scored.distance_km(), 10.0);
        assert_eq!(scored.carbon_emission(), 2.1);
        assert_eq!(scored.segment(), &seg);
    }
}
