//! Route-level aggregation.

use crate::domain::{DomainError, RouteTotals, ScoredSegment};

/// Sums segment fields into route totals.
///
/// # Errors
///
/// Returns `DomainError::EmptyRoute` if there are no segments, and
/// `DomainError::NonFiniteValue` if any total overflows.
pub fn aggregate(segments: &[ScoredSegment]) -> Result<RouteTotals, DomainError> {
    if segments.is_empty() {
        return Err(DomainError::EmptyRoute);
    }

    let totals = segments
        .iter()
        .fold(RouteTotals::default(), |totals, segment| RouteTotals {
            distance_km: totals.distance_km + segment.distance_km(),
            duration_mins: totals.duration_mins + segment.duration_mins(),
            cost: totals.cost + segment.cost(),
            carbon_kg: totals.carbon_kg + segment.carbon_emission(),
        });

    finite("total distance", totals.distance_km)?;
    finite("total duration", totals.duration_mins)?;
    finite("total cost", totals.cost)?;
    finite("total carbon", totals.carbon_kg)?;
    Ok(totals)
}

fn finite(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFiniteValue { field })
    }
}
