//! Route ranking for scored results.
//!
//! Ranks routes so the most useful options come first, and prunes
//! options that are worse than another on every axis.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::RouteOption;

/// Ordering criterion for ranked routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankBy {
    /// Highest sustainability score first
    #[default]
    Sustainability,
    /// Lowest footprint first
    Carbon,
    /// Shortest total duration first
    Duration,
    /// Cheapest first
    Cost,
}

impl RankBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankBy::Sustainability => "sustainability",
            RankBy::Carbon => "carbon",
            RankBy::Duration => "duration",
            RankBy::Cost => "cost",
        }
    }

    fn compare(&self, a: &RouteOption, b: &RouteOption) -> Ordering {
        match self {
            RankBy::Sustainability => b.sustainability_score().cmp(&a.sustainability_score()),
            RankBy::Carbon => a.totals().carbon_kg.total_cmp(&b.totals().carbon_kg),
            RankBy::Duration => a.totals().duration_mins.total_cmp(&b.totals().duration_mins),
            RankBy::Cost => a.totals().cost.total_cmp(&b.totals().cost),
        }
    }
}

/// Error returned when parsing an unknown ranking criterion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ranking criterion: {0:?}")]
pub struct InvalidRankBy(String);

impl FromStr for RankBy {
    type Err = InvalidRankBy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sustainability" | "score" => Ok(RankBy::Sustainability),
            "carbon" => Ok(RankBy::Carbon),
            "duration" => Ok(RankBy::Duration),
            "cost" => Ok(RankBy::Cost),
            _ => Err(InvalidRankBy(s.to_string())),
        }
    }
}

impl fmt::Display for RankBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank routes by the given criterion.
///
/// The sort is stable: routes that compare equal keep their input order.
/// Returns routes sorted best-first.
pub fn rank_routes(mut routes: Vec<RouteOption>, rank_by: RankBy) -> Vec<RouteOption> {
    routes.sort_by(|a, b| rank_by.compare(a, b));
    routes
}

/// Returns true if `a` is no worse than `b` on carbon, duration and cost,
/// and strictly better on at least one.
fn dominates(a: &RouteOption, b: &RouteOption) -> bool {
    let (a, b) = (a.totals(), b.totals());
    a.carbon_kg <= b.carbon_kg
        && a.duration_mins <= b.duration_mins
        && a.cost <= b.cost
        && (a.carbon_kg < b.carbon_kg || a.duration_mins < b.duration_mins || a.cost < b.cost)
}

/// Remove dominated routes.
///
/// A route is dominated if another route emits no more, takes no longer and
/// costs no more, while being strictly better in at least one of those.
/// Survivors keep their input order.
pub fn remove_dominated(routes: Vec<RouteOption>) -> Vec<RouteOption> {
    if routes.len() <= 1 {
        return routes;
    }

    let mut result: Vec<RouteOption> = Vec::with_capacity(routes.len());

    for route in routes {
        if result.iter().any(|existing| dominates(existing, &route)) {
            continue;
        }
        // Also remove any kept routes dominated by this one
        result.retain(|existing| !dominates(&route, existing));
        result.push(route);
    }

    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{TransportMode, TransportSegment};
    use crate::scoring::ScoringConfig;
    use proptest::prelude::*;

    fn route_strategy() -> impl Strategy<Value = RouteOption> {
        prop::collection::vec((0usize..7, 0.0f64..2000.0, 0.0f64..600.0, 0.0f64..200.0), 1..4)
            .prop_map(|legs| {
                let segments = legs
                    .into_iter()
                    .map(|(idx, km, mins, cost)| {
                        TransportSegment::new(TransportMode::ALL[idx], km, mins, cost).unwrap()
                    })
                    .collect();
                RouteOption::score(None, segments, &ScoringConfig::default()).unwrap()
            })
    }

    fn routes_strategy() -> impl Strategy<Value = Vec<RouteOption>> {
        prop::collection::vec(route_strategy(), 0..12)
    }

    proptest! {
        #[test]
        fn sustainability_rank_is_sorted(routes in routes_strategy()) {
            let ranked = rank_routes(routes, RankBy::Sustainability);
            for window in ranked.windows(2) {
                prop_assert!(window[0].sustainability_score() >= window[1].sustainability_score());
            }
        }

        #[test]
        fn rank_preserves_elements(routes in routes_strategy()) {
            let original_len = routes.len();
            prop_assert_eq!(rank_routes(routes, RankBy::Carbon).len(), original_len);
        }

        #[test]
        fn remove_dominated_no_internal_domination(routes in routes_strategy()) {
            let result = remove_dominated(routes);
            for (i, a) in result.iter().enumerate() {
                for (j, b) in result.iter().enumerate() {
                    if i != j {
                        prop_assert!(!dominates(a, b), "route {} dominates route {}", i, j);
                    }
                }
            }
        }

        #[test]
        fn remove_dominated_subset(routes in routes_strategy()) {
            let original_len = routes.len();
            prop_assert!(remove_dominated(routes).len() <= original_len);
        }
    }
}
