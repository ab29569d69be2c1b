//! Emission factor table.
//!
//! Factors are kg CO2e per passenger-km. The table is a set of constants;
//! lookups never allocate and never fail for the default variant.

use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, TransportMode};

/// Base factor for a standard petrol car. Reference for scoring and for the
/// conventional-travel comparison.
pub const CAR_BASE_FACTOR: f64 = 0.21;

const TRAIN_BASE_FACTOR: f64 = 0.041;
const BUS_BASE_FACTOR: f64 = 0.089;
const METRO_BASE_FACTOR: f64 = 0.028;

const PLANE_DOMESTIC_FACTOR: f64 = 0.285;
const PLANE_SHORT_HAUL_FACTOR: f64 = 0.230;
const PLANE_LONG_HAUL_FACTOR: f64 = 0.195;

/// Flights shorter than this (km) use the domestic factor.
pub const DOMESTIC_FLIGHT_MAX_KM: f64 = 500.0;

/// Flights longer than this (km) use the long-haul factor.
pub const SHORT_HAUL_FLIGHT_MAX_KM: f64 = 1500.0;

/// A sub-type of a mode with its own emission factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorVariant {
    Base,
    Electric,
    Hybrid,
    Diesel,
    Domestic,
    ShortHaul,
    LongHaul,
}

impl FactorVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorVariant::Base => "base",
            FactorVariant::Electric => "electric",
            FactorVariant::Hybrid => "hybrid",
            FactorVariant::Diesel => "diesel",
            FactorVariant::Domestic => "domestic",
            FactorVariant::ShortHaul => "short-haul",
            FactorVariant::LongHaul => "long-haul",
        }
    }
}

impl fmt::Display for FactorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emission factor variant: {0:?}")]
pub struct InvalidVariant(String);

impl FromStr for FactorVariant {
    type Err = InvalidVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(FactorVariant::Base),
            "electric" => Ok(FactorVariant::Electric),
            "hybrid" => Ok(FactorVariant::Hybrid),
            "diesel" => Ok(FactorVariant::Diesel),
            "domestic" => Ok(FactorVariant::Domestic),
            "short-haul" | "short_haul" => Ok(FactorVariant::ShortHaul),
            "long-haul" | "long_haul" => Ok(FactorVariant::LongHaul),
            _ => Err(InvalidVariant(s.to_string())),
        }
    }
}

/// Distance band for flights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightBand {
    Domestic,
    ShortHaul,
    LongHaul,
}

impl FlightBand {
    /// Selects the band for a flight distance.
    ///
    /// `< 500` is domestic, `500..=1500` short-haul, `> 1500` long-haul.
    ///
    /// # Examples
    ///
    /// ```
    /// use eco_planner::carbon::FlightBand;
    ///
    /// assert_eq!(FlightBand::for_distance(499.9), FlightBand::Domestic);
    /// assert_eq!(FlightBand::for_distance(500.0), FlightBand::ShortHaul);
    /// assert_eq!(FlightBand::for_distance(1500.0), FlightBand::ShortHaul);
    /// assert_eq!(FlightBand::for_distance(1500.1), FlightBand::LongHaul);
    /// ```
    pub fn for_distance(distance_km: f64) -> Self {
        if distance_km < DOMESTIC_FLIGHT_MAX_KM {
            FlightBand::Domestic
        } else if distance_km <= SHORT_HAUL_FLIGHT_MAX_KM {
            FlightBand::ShortHaul
        } else {
            FlightBand::LongHaul
        }
    }

    pub fn variant(&self) -> FactorVariant {
        match self {
            FlightBand::Domestic => FactorVariant::Domestic,
            FlightBand::ShortHaul => FactorVariant::ShortHaul,
            FlightBand::LongHaul => FactorVariant::LongHaul,
        }
    }
}

/// Factor for an explicit (mode, variant) pair, if the table defines one.
fn lookup(mode: TransportMode, variant: FactorVariant) -> Option<f64> {
    use FactorVariant as V;
    use TransportMode as M;

    let factor = match (mode, variant) {
        (M::Car, V::Base) => CAR_BASE_FACTOR,
        (M::Car, V::Electric) => 0.053,
        (M::Car, V::Hybrid) => 0.12,
        (M::Car, V::Diesel) => 0.17,

        (M::Train, V::Base) => TRAIN_BASE_FACTOR,
        (M::Train, V::Electric) => 0.035,
        (M::Train, V::Diesel) => 0.06,

        (M::Bus, V::Base) => BUS_BASE_FACTOR,
        (M::Bus, V::Electric) => 0.03,
        (M::Bus, V::Hybrid) => 0.065,

        // Base plane factor is the short-haul one; used only when no
        // distance is known.
        (M::Plane, V::Base) | (M::Plane, V::ShortHaul) => PLANE_SHORT_HAUL_FACTOR,
        (M::Plane, V::Domestic) => PLANE_DOMESTIC_FACTOR,
        (M::Plane, V::LongHaul) => PLANE_LONG_HAUL_FACTOR,

        (M::Metro, V::Base) => METRO_BASE_FACTOR,

        (M::Bike, V::Base) => 0.0,
        (M::Bike, V::Electric) => 0.005,

        (M::Walk, V::Base) => 0.0,

        _ => return None,
    };
    Some(factor)
}

/// Base factor for a mode. Defined for every mode.
pub fn base_factor(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Car => CAR_BASE_FACTOR,
        TransportMode::Train => TRAIN_BASE_FACTOR,
        TransportMode::Bus => BUS_BASE_FACTOR,
        TransportMode::Plane => PLANE_SHORT_HAUL_FACTOR,
        TransportMode::Metro => METRO_BASE_FACTOR,
        TransportMode::Bike | TransportMode::Walk => 0.0,
    }
}

/// Default factor for a leg of known distance.
///
/// Same as `emission_factor(mode, None, Some(distance_km))`, but infallible.
pub fn distance_factor(mode: TransportMode, distance_km: f64) -> f64 {
    match mode {
        TransportMode::Plane => match FlightBand::for_distance(distance_km) {
            FlightBand::Domestic => PLANE_DOMESTIC_FACTOR,
            FlightBand::ShortHaul => PLANE_SHORT_HAUL_FACTOR,
            FlightBand::LongHaul => PLANE_LONG_HAUL_FACTOR,
        },
        _ => base_factor(mode),
    }
}

/// Returns the emission factor (kg CO2e per km) for a mode.
///
/// An explicit `variant` always wins. For planes without a variant, a known
/// `distance_km` selects the band (see [`FlightBand::for_distance`]).
/// Every other case returns the mode's base factor.
///
/// # Errors
///
/// Returns `DomainError::UnsupportedVariant` if the mode has no factor for
/// the requested variant.
///
/// # Examples
///
/// ```
/// use eco_planner::carbon::{FactorVariant, emission_factor};
/// use eco_planner::domain::TransportMode;
///
/// assert_eq!(emission_factor(TransportMode::Car, None, None).unwrap(), 0.21);
/// assert_eq!(emission_factor(TransportMode::Plane, None, Some(400.0)).unwrap(), 0.285);
/// assert_eq!(
///     emission_factor(TransportMode::Bus, Some(FactorVariant::Electric), None).unwrap(),
///     0.03
/// );
/// assert!(emission_factor(TransportMode::Walk, Some(FactorVariant::Diesel), None).is_err());
/// ```
pub fn emission_factor(
    mode: TransportMode,
    variant: Option<FactorVariant>,
    distance_km: Option<f64>,
) -> Result<f64, DomainError> {
    let variant = match (mode, variant, distance_km) {
        (_, Some(variant), _) => variant,
        (TransportMode::Plane, None, Some(km)) => FlightBand::for_distance(km).variant(),
        (_, None, _) => FactorVariant::Base,
    };

    lookup(mode, variant).ok_or(DomainError::UnsupportedVariant { mode, variant })
}

/// One row of the factor table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorEntry {
    pub mode: TransportMode,
    pub variant: FactorVariant,
    pub kg_per_km: f64,
}

const ALL_VARIANTS: [FactorVariant; 7] = [
    FactorVariant::Base,
    FactorVariant::Electric,
    FactorVariant::Hybrid,
    FactorVariant::Diesel,
    FactorVariant::Domestic,
    FactorVariant::ShortHaul,
    FactorVariant::LongHaul,
];

/// Enumerates every defined (mode, variant) factor.
pub fn factor_table() -> Vec<FactorEntry> {
    TransportMode::ALL
        .iter()
        .flat_map(|&mode| {
            ALL_VARIANTS.iter().filter_map(move |&variant| {
                lookup(mode, variant).map(|kg_per_km| FactorEntry {
                    mode,
                    variant,
                    kg_per_km,
                })
            })
        })
        .collect()
}
