//! Batch scoring of candidate routes.
//!
//! Candidates arrive from a route-discovery collaborator as raw, possibly
//! stale data. Each one is validated and rescored from scratch; a bad
//! candidate is reported and dropped without affecting the rest.

use tracing::{debug, info, warn};

use crate::carbon::ComparisonData;
use crate::domain::{DomainError, RouteOption, TransitDetails, TransportMode, TransportSegment};
use crate::scoring::{RankBy, ScoringConfig, rank_routes, remove_dominated};

/// One leg of a candidate route, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSegment {
    /// Mode name, e.g. "train"
    pub mode: String,
    pub distance_km: f64,
    pub duration_mins: f64,
    pub cost: f64,
    pub provider: Option<String>,
    pub transit_details: Option<TransitDetails>,
    /// Caller's emission figure. Ignored; always recomputed.
    pub carbon_emission: Option<f64>,
}

impl CandidateSegment {
    /// Validate into a domain segment.
    pub fn to_segment(&self) -> Result<TransportSegment, DomainError> {
        let mode = TransportMode::parse(&self.mode)?;
        let mut segment =
            TransportSegment::new(mode, self.distance_km, self.duration_mins, self.cost)?;
        if let Some(provider) = &self.provider {
            segment = segment.with_provider(provider.clone());
        }
        if let Some(details) = &self.transit_details {
            segment = segment.with_transit_details(details.clone());
        }
        Ok(segment)
    }
}

/// A route as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteCandidate {
    pub id: Option<String>,
    pub segments: Vec<CandidateSegment>,
    /// Caller's score. Ignored; always recomputed.
    pub sustainability_score: Option<f64>,
}

impl RouteCandidate {
    /// Validate and score this candidate.
    pub fn score(&self, config: &ScoringConfig) -> Result<RouteOption, DomainError> {
        let segments = self
            .segments
            .iter()
            .map(CandidateSegment::to_segment)
            .collect::<Result<Vec<_>, _>>()?;
        RouteOption::score(self.id.clone(), segments, config)
    }
}

/// Options controlling how a batch is ranked.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Ordering of the scored routes.
    pub rank_by: RankBy,

    /// Drop routes beaten on carbon, duration and cost by another route.
    pub prune_dominated: bool,

    /// Maximum number of routes to return.
    pub max_results: Option<usize>,
}

/// A candidate that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRoute {
    /// Position in the input list
    pub index: usize,
    pub id: Option<String>,
    pub error: DomainError,
}

/// Result of scoring a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Scored routes, ranked best-first.
    pub routes: Vec<RouteOption>,

    /// Candidates that could not be scored, in input order.
    pub rejected: Vec<RejectedRoute>,

    /// Comparison with driving for the top-ranked route.
    pub comparison: Option<ComparisonData>,
}

impl BatchOutcome {
    /// Returns the top-ranked route, if any survived.
    pub fn best(&self) -> Option<&RouteOption> {
        self.routes.first()
    }
}

/// Score, rank and compare a batch of candidate routes.
///
/// Every segment emission, route footprint and score is recomputed; values
/// supplied by the caller are ignored. Candidates that fail validation end
/// up in `rejected`. An empty batch gives an empty outcome.
pub fn process_routes(
    candidates: &[RouteCandidate],
    config: &ScoringConfig,
    options: &BatchOptions,
) -> BatchOutcome {
    let mut routes = Vec::with_capacity(candidates.len());
    let mut rejected = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        match candidate.score(config) {
            Ok(route) => {
                debug!(
                    index,
                    id = route.id(),
                    score = route.sustainability_score(),
                    carbon_kg = route.totals().carbon_kg,
                    "scored route"
                );
                routes.push(route);
            }
            Err(error) => {
                warn!(index, id = candidate.id.as_deref(), %error, "rejected route");
                rejected.push(RejectedRoute {
                    index,
                    id: candidate.id.clone(),
                    error,
                });
            }
        }
    }

    if options.prune_dominated {
        let before = routes.len();
        routes = remove_dominated(routes);
        debug!(pruned = before - routes.len(), "removed dominated routes");
    }

    let mut routes = rank_routes(routes, options.rank_by);
    if let Some(max) = options.max_results {
        routes.truncate(max);
    }

    let comparison = routes.first().map(ComparisonData::for_route);

    info!(
        candidates = candidates.len(),
        scored = routes.len(),
        rejected = rejected.len(),
        rank_by = %options.rank_by,
        best_zero_emission = routes.first().map(RouteOption::is_zero_emission),
        best_saves_carbon = comparison.as_ref().map(ComparisonData::is_saving),
        "processed route batch"
    );

    BatchOutcome {
        routes,
        rejected,
        comparison,
    }
}
