//! Comparison against driving the same distance.

use crate::domain::RouteOption;

use super::factors::CAR_BASE_FACTOR;

/// How a route's footprint compares to a standard car over the same distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonData {
    /// What a standard car would emit over the route's distance (kg CO2e).
    pub conventional_footprint_kg: f64,
    /// Conventional minus actual. Negative means worse than driving.
    pub savings_kg: f64,
    /// Human-readable summary of `savings_kg`.
    pub savings: String,
    /// Savings as a signed, rounded percentage of the conventional footprint.
    pub savings_percentage: i32,
}

impl ComparisonData {
    /// Compares a scored route with driving.
    pub fn for_route(route: &RouteOption) -> Self {
        compare_footprint(route.totals().distance_km, route.totals().carbon_kg)
    }

    /// Returns true if the route emits measurably less than driving.
    pub fn is_saving(&self) -> bool {
        self.savings_percentage > 0
    }
}

/// Compares an actual footprint with a car over `distance_km`.
///
/// # Examples
///
/// ```
/// use eco_planner::carbon::compare_footprint;
///
/// // 100 km by train emits 4.1 kg; a car would emit 21 kg
/// let cmp = compare_footprint(100.0, 4.1);
/// assert_eq!(cmp.savings_percentage, 80);
/// assert_eq!(cmp.savings, "16.90 kg CO2e saved");
/// ```
pub fn compare_footprint(distance_km: f64, actual_kg: f64) -> ComparisonData {
    let conventional = distance_km * CAR_BASE_FACTOR;
    let savings_kg = conventional - actual_kg;
    // Summation order leaves last-bit noise between equal footprints
    let savings_kg = if negligible(savings_kg, conventional) {
        0.0
    } else {
        savings_kg
    };

    ComparisonData {
        conventional_footprint_kg: conventional,
        savings_kg,
        savings: savings_text(savings_kg),
        savings_percentage: savings_percentage(savings_kg, conventional),
    }
}

/// Relative tolerance below which a saving counts as zero.
const SAVINGS_TOLERANCE: f64 = 1e-9;

fn negligible(savings_kg: f64, conventional_kg: f64) -> bool {
    savings_kg.abs() <= SAVINGS_TOLERANCE * conventional_kg.abs().max(1.0)
}

fn savings_text(savings_kg: f64) -> String {
    if savings_kg > 0.0 {
        format!("{savings_kg:.2} kg CO2e saved")
    } else if savings_kg < 0.0 {
        format!("{:.2} kg CO2e additional emissions", savings_kg.abs())
    } else {
        "No difference in emissions".to_string()
    }
}

/// Rounded percentage that never loses the sign of a non-zero saving.
fn savings_percentage(savings_kg: f64, conventional_kg: f64) -> i32 {
    if conventional_kg <= 0.0 {
        return 0;
    }

    let rounded = (savings_kg / conventional_kg * 100.0).round() as i32;
    if rounded == 0 && savings_kg != 0.0 {
        if savings_kg > 0.0 { 1 } else { -1 }
    } else {
        rounded
    }
}
