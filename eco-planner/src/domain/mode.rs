//! Transport mode type.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {input:?}")]
pub struct InvalidMode {
    input: String,
}

impl InvalidMode {
    /// Returns the text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A way of travelling one leg of a route.
///
/// The set is closed: every lookup table keyed by mode is an exhaustive
/// `match`, so adding a variant forces each table to be updated.
///
/// # Examples
///
/// ```
/// use eco_planner::domain::TransportMode;
///
/// let mode = TransportMode::parse("train").unwrap();
/// assert_eq!(mode, TransportMode::Train);
/// assert_eq!(mode.as_str(), "train");
///
/// // Surrounding whitespace and case are ignored
/// assert_eq!(TransportMode::parse(" Plane ").unwrap(), TransportMode::Plane);
///
/// // Unknown modes are rejected
/// assert!(TransportMode::parse("hovercraft").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportMode {
    Car,
    Train,
    Bus,
    Plane,
    Metro,
    Bike,
    Walk,
}

impl TransportMode {
    /// Every mode, in declaration order.
    pub const ALL: [TransportMode; 7] = [
        TransportMode::Car,
        TransportMode::Train,
        TransportMode::Bus,
        TransportMode::Plane,
        TransportMode::Metro,
        TransportMode::Bike,
        TransportMode::Walk,
    ];

    /// Parse a mode from its lowercase name.
    ///
    /// Leading/trailing whitespace is trimmed and matching is
    /// case-insensitive.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        let normalized = s.trim().to_ascii_lowercase();
        let mode = match normalized.as_str() {
            "car" => TransportMode::Car,
            "train" => TransportMode::Train,
            "bus" => TransportMode::Bus,
            "plane" => TransportMode::Plane,
            "metro" => TransportMode::Metro,
            "bike" => TransportMode::Bike,
            "walk" => TransportMode::Walk,
            _ => {
                return Err(InvalidMode {
                    input: s.to_string(),
                });
            }
        };
        Ok(mode)
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Plane => "plane",
            TransportMode::Metro => "metro",
            TransportMode::Bike => "bike",
            TransportMode::Walk => "walk",
        }
    }
}

impl FromStr for TransportMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anything outside the seven names is rejected
        #[test]
        fn arbitrary_words_rejected(s in "[a-z]{6,12}") {
            prop_assume!(!TransportMode::ALL.iter().any(|m| m.as_str() == s));
            prop_assert!(TransportMode::parse(&s).is_err());
        }

        /// Display then parse is the identity
        #[test]
        fn display_roundtrip(idx in 0usize..7) {
            let mode = TransportMode::ALL[idx];
            prop_assert_eq!(TransportMode::parse(&mode.to_string()).unwrap(), mode);
        }
    }
}
