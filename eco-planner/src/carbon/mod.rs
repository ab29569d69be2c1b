//! Carbon accounting.
//!
//! Converts transport segments into kg CO2e using a fixed emission factor
//! table, sums them into route footprints, and compares a route with
//! driving the same distance.

mod aggregate;
mod compare;
mod factors;
mod segment;

pub use aggregate::aggregate;
pub use compare::{ComparisonData, compare_footprint};
pub use factors::{
    CAR_BASE_FACTOR, DOMESTIC_FLIGHT_MAX_KM, FactorEntry, FactorVariant, FlightBand,
    InvalidVariant, SHORT_HAUL_FLIGHT_MAX_KM, base_factor, distance_factor, emission_factor,
    factor_table,
};
pub use segment::{score_segment, segment_emissions};
