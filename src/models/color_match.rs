//! Nearest-match result returned by the match service.

use serde::{Deserialize, Serialize};

use super::HexColor;
use crate::error::{Error, Result};

/// A named reference color and its distance from the queried color.
///
/// Lower distances are closer matches; an exact match has distance 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMatch {
    /// Reference name, e.g. "PANTONE 18-1763 TPX Red".
    pub name: String,
    /// Canonical hex of the reference color.
    pub hex: HexColor,
    /// Non-negative distance score.
    pub distance: f64,
}

impl ColorMatch {
    /// Creates a new match.
    pub fn new(name: impl Into<String>, hex: HexColor, distance: f64) -> Self {
        Self {
            name: name.into(),
            hex,
            distance,
        }
    }

    /// Checks the distance is finite and non-negative.
    ///
    /// Responses failing this check are treated as a service failure.
    pub fn validate(&self) -> Result<()> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(Error::MatchServiceFailure(format!(
                "match '{}' has invalid distance {}",
                self.name, self.distance
            )));
        }
        Ok(())
    }
}
