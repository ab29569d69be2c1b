//! Per-mode sub-score tables (0-100, higher is better).

use crate::domain::TransportMode;

/// Energy efficiency per passenger.
pub fn mode_efficiency(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Car => 20.0,
        TransportMode::Train => 90.0,
        TransportMode::Bus => 70.0,
        TransportMode::Plane => 10.0,
        TransportMode::Metro => 85.0,
        TransportMode::Bike => 100.0,
        TransportMode::Walk => 100.0,
    }
}

/// Share of renewable energy typically powering the mode.
pub fn renewable_energy(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Car => 10.0,
        TransportMode::Train => 80.0,
        TransportMode::Bus => 30.0,
        TransportMode::Plane => 5.0,
        TransportMode::Metro => 70.0,
        TransportMode::Bike => 100.0,
        TransportMode::Walk => 100.0,
    }
}

/// Contribution to keeping traffic off the road.
///
/// Planes score moderately: they add nothing to road congestion.
pub fn congestion_reduction(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Car => 0.0,
        TransportMode::Train => 90.0,
        TransportMode::Bus => 70.0,
        TransportMode::Plane => 60.0,
        TransportMode::Metro => 95.0,
        TransportMode::Bike => 100.0,
        TransportMode::Walk => 100.0,
    }
}
