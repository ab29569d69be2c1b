//! Sustainability scoring and ranking.
//!
//! Turns scored segments into a single 0-100 sustainability score and
//! orders routes for presentation.

mod config;
mod rank;
mod score;
mod tables;

pub use config::{InvalidWeights, ScoringConfig, ScoringWeights};
pub use rank::{InvalidRankBy, RankBy, rank_routes, remove_dominated};
pub use score::{
    SustainabilityBreakdown, carbon_score, distance_weighted, sustainability_breakdown,
    sustainability_score,
};
pub use tables::{congestion_reduction, mode_efficiency, renewable_energy};
