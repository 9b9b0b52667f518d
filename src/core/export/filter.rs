//! Asset state filter policy

use crate::domain::{AssetState, ExportError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which assets an export includes, by lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStateFilter {
    /// Every asset
    All,
    /// Visited or tagged assets
    Visited,
    /// Tagged assets only
    Tagged,
}

impl AssetStateFilter {
    /// All filter policies, widest first
    pub const ALL: [AssetStateFilter; 3] = [
        AssetStateFilter::All,
        AssetStateFilter::Visited,
        AssetStateFilter::Tagged,
    ];

    /// Whether an asset in `state` passes this filter
    pub fn matches(self, state: AssetState) -> bool {
        match self {
            AssetStateFilter::All => true,
            AssetStateFilter::Visited => {
                matches!(state, AssetState::Visited | AssetState::Tagged)
            }
            AssetStateFilter::Tagged => state == AssetState::Tagged,
        }
    }

    /// Configuration value of this filter
    pub fn as_str(self) -> &'static str {
        match self {
            AssetStateFilter::All => "all",
            AssetStateFilter::Visited => "visited",
            AssetStateFilter::Tagged => "tagged",
        }
    }
}

impl fmt::Display for AssetStateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetStateFilter {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(AssetStateFilter::All),
            "visited" => Ok(AssetStateFilter::Visited),
            "tagged" => Ok(AssetStateFilter::Tagged),
            _ => Err(ExportError::InvalidState(format!(
                "Unrecognized asset state filter '{s}'. Must be one of: all, visited, tagged"
            ))),
        }
    }
}
