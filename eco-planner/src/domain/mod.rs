//! Domain types for the carbon scoring engine.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod error;
mod mode;
mod route;
mod segment;

pub use error::DomainError;
pub use mode::{InvalidMode, TransportMode};
pub use route::{RouteOption, RouteTotals};
pub use segment::{ScoredSegment, TransitDetails, TransportSegment};
