//! Load type definitions for partial-factor load combinations
//!
//! Every method-dependent calculator combines exactly one permanent load and
//! two variable loads (long-term and short-term).

use serde::{Deserialize, Serialize};

/// Load categories entering a design load combination
///
/// # Example
/// ```
/// use calc_core::loads::LoadType;
///
/// let g = LoadType::Permanent;
/// assert_eq!(g.code(), "G");
/// assert_eq!(g.description(), "Permanent load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// G - Permanent load (self-weight, finishes, fixed equipment)
    Permanent,
    /// Ql - Long-term variable load (storage, partitions)
    VariableLong,
    /// Qs - Short-term variable load (occupancy peaks, snow, wind)
    VariableShort,
}

impl LoadType {
    /// All load types in combination order
    pub const ALL: [LoadType; 3] = [
        LoadType::Permanent,
        LoadType::VariableLong,
        LoadType::VariableShort,
    ];

    /// Abbreviation used in combination equations (G, Ql, Qs)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Permanent => "G",
            LoadType::VariableLong => "Ql",
            LoadType::VariableShort => "Qs",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Permanent => "Permanent load",
            LoadType::VariableLong => "Long-term variable load",
            LoadType::VariableShort => "Short-term variable load",
        }
    }

    /// Whether this load type is variable (may be absent from a combination)
    pub fn is_variable(&self) -> bool {
        !matches!(self, LoadType::Permanent)
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
