//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::batch::{CandidateSegment, RejectedRoute, RouteCandidate};
use crate::carbon::{ComparisonData, FactorEntry};
use crate::domain::{RouteOption, ScoredSegment, TransitDetails};

/// Request to score a batch of routes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRoutesRequest {
    /// Candidate routes
    pub routes: Vec<RouteCandidateDto>,

    /// Ranking criterion (defaults to sustainability)
    pub rank_by: Option<String>,

    /// Drop routes beaten on carbon, duration and cost
    #[serde(default)]
    pub prune_dominated: bool,

    /// Maximum number of routes to return
    pub max_results: Option<usize>,
}

/// A candidate route as sent by the route-discovery layer.
///
/// Derived fields such as `totalCarbonFootprint` may be present and stale;
/// they are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCandidateDto {
    /// Caller's identifier for the route
    pub id: Option<String>,

    /// Route legs in travel order
    pub transport_modes: Vec<SegmentDto>,

    /// Caller's score, ignored
    pub sustainability_score: Option<f64>,
}

/// One leg of a candidate route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDto {
    /// Mode name, e.g. "train"
    pub mode: String,

    /// Distance in km
    pub distance: f64,

    /// Duration in minutes
    pub duration: f64,

    /// Fare or running cost
    #[serde(default)]
    pub cost: f64,

    /// Caller's emission figure, ignored
    pub carbon_emission: Option<f64>,

    /// Operator or provider name
    pub provider: Option<String>,

    /// Public-transit metadata
    pub transit_details: Option<TransitDetailsDto>,
}

/// Public-transit metadata for a leg.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitDetailsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_stop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_stop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_stops: Option<u32>,
}

/// A scored route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Legs with recomputed emissions
    pub transport_modes: Vec<SegmentResult>,

    /// Total duration in minutes
    pub total_duration: f64,

    /// Total distance in km
    pub total_distance: f64,

    pub total_cost: f64,

    /// Total footprint in kg CO2e
    pub total_carbon_footprint: f64,

    /// Final 0-100 score
    pub sustainability_score: u8,

    /// Sub-scores behind the final score
    pub score_breakdown: BreakdownResult,
}

/// A scored leg.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResult {
    pub mode: String,
    pub distance: f64,
    pub duration: f64,
    pub cost: f64,

    /// Emission in kg CO2e
    pub carbon_emission: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_details: Option<TransitDetailsDto>,
}

/// Sub-scores of a route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResult {
    pub carbon: f64,
    pub mode_efficiency: f64,
    pub renewable_energy: f64,
    pub congestion_reduction: f64,
}

/// Comparison with driving the same distance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// kg CO2e a standard car would emit
    pub conventional_footprint: f64,

    /// Signed saving in kg CO2e
    pub savings_kg: f64,

    /// Human-readable saving
    pub savings: String,

    /// Signed saving as a percentage of driving
    pub savings_percentage: i32,
}

/// A candidate that could not be scored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedResult {
    /// Position in the request
    pub index: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub error: String,
}

/// Response for batch scoring.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRoutesResponse {
    /// Scored routes, best first
    pub routes: Vec<RouteResult>,

    /// Comparison for the top route
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,

    /// Candidates that were dropped
    pub rejected: Vec<RejectedResult>,
}

/// Response for comparing a single route.
#[derive(Debug, Serialize)]
pub struct CompareRouteResponse {
    pub route: RouteResult,
    pub comparison: ComparisonResult,
}

/// One emission factor table entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorResult {
    pub mode: String,
    pub variant: String,
    pub kg_co2e_per_km: f64,
}

/// Response listing the emission factor table.
#[derive(Debug, Serialize)]
pub struct EmissionFactorsResponse {
    pub factors: Vec<FactorResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<TransitDetailsDto> for TransitDetails {
    fn from(dto: TransitDetailsDto) -> Self {
        TransitDetails {
            line: dto.line,
            agency: dto.agency,
            departure_stop: dto.departure_stop,
            arrival_stop: dto.arrival_stop,
            num_stops: dto.num_stops,
        }
    }
}

impl From<&TransitDetails> for TransitDetailsDto {
    fn from(details: &TransitDetails) -> Self {
        TransitDetailsDto {
            line: details.line.clone(),
            agency: details.agency.clone(),
            departure_stop: details.departure_stop.clone(),
            arrival_stop: details.arrival_stop.clone(),
            num_stops: details.num_stops,
        }
    }
}

impl From<SegmentDto> for CandidateSegment {
    fn from(dto: SegmentDto) -> Self {
        CandidateSegment {
            mode: dto.mode,
            distance_km: dto.distance,
            duration_mins: dto.duration,
            cost: dto.cost,
            provider: dto.provider,
            transit_details: dto.transit_details.map(TransitDetails::from),
            carbon_emission: dto.carbon_emission,
        }
    }
}

impl From<RouteCandidateDto> for RouteCandidate {
    fn from(dto: RouteCandidateDto) -> Self {
        RouteCandidate {
            id: dto.id,
            segments: dto.transport_modes.into_iter().map(Into::into).collect(),
            sustainability_score: dto.sustainability_score,
        }
    }
}

impl SegmentResult {
    /// Create from a scored segment.
    pub fn from_segment(scored: &ScoredSegment) -> Self {
        let segment = scored.segment();
        SegmentResult {
            mode: segment.mode().to_string(),
            distance: segment.distance_km(),
            duration: segment.duration_mins(),
            cost: segment.cost(),
            carbon_emission: scored.carbon_emission(),
            provider: segment.provider().map(str::to_string),
            transit_details: segment.transit_details().map(TransitDetailsDto::from),
        }
    }
}

impl RouteResult {
    /// Create from a scored route.
    pub fn from_route(route: &RouteOption) -> Self {
        let totals = route.totals();
        let breakdown = route.breakdown();
        RouteResult {
            id: route.id().map(str::to_string),
            transport_modes: route
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            total_duration: totals.duration_mins,
            total_distance: totals.distance_km,
            total_cost: totals.cost,
            total_carbon_footprint: totals.carbon_kg,
            sustainability_score: route.sustainability_score(),
            score_breakdown: BreakdownResult {
                carbon: breakdown.carbon,
                mode_efficiency: breakdown.mode_efficiency,
                renewable_energy: breakdown.renewable_energy,
                congestion_reduction: breakdown.congestion_reduction,
            },
        }
    }
}

impl From<&ComparisonData> for ComparisonResult {
    fn from(data: &ComparisonData) -> Self {
        ComparisonResult {
            conventional_footprint: data.conventional_footprint_kg,
            savings_kg: data.savings_kg,
            savings: data.savings.clone(),
            savings_percentage: data.savings_percentage,
        }
    }
}

impl From<&RejectedRoute> for RejectedResult {
    fn from(rejected: &RejectedRoute) -> Self {
        RejectedResult {
            index: rejected.index,
            id: rejected.id.clone(),
            error: rejected.error.to_string(),
        }
    }
}

impl From<&FactorEntry> for FactorResult {
    fn from(entry: &FactorEntry) -> Self {
        FactorResult {
            mode: entry.mode.to_string(),
            variant: entry.variant.to_string(),
            kg_co2e_per_km: entry.kg_per_km,
        }
    }
}
