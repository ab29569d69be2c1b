//! Web layer for the carbon scoring engine.
//!
//! Provides JSON endpoints for scoring candidate routes and listing
//! emission factors.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
