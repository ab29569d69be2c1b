//! Domain error types.
//!
//! These errors represent validation failures in route and segment data.
//! They are distinct from configuration and HTTP errors.

use super::{InvalidMode, TransportMode};
use crate::carbon::FactorVariant;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Route has no segments
    #[error("route must have at least one segment")]
    EmptyRoute,

    /// A quantity that must be non-negative was negative
    #[error("{field} must be non-negative, got {value}")]
    NegativeValue { field: &'static str, value: f64 },

    /// A quantity was NaN or infinite
    #[error("{field} must be a finite number")]
    NonFiniteValue { field: &'static str },

    /// Mode name not recognised
    #[error(transparent)]
    InvalidMode(#[from] InvalidMode),

    /// Emission factor variant not defined for this mode
    #[error("no {variant} emission factor for {mode}")]
    UnsupportedVariant {
        mode: TransportMode,
        variant: FactorVariant,
    },
}

/// Checks that a quantity is finite and non-negative.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(DomainError::NegativeValue { field, value });
    }
    Ok(value)
}
