//! Design methods, partial safety factors, and load combination
//!
//! # Overview
//!
//! - [`DesignMethod`] - The three supported partial-factor regimes (SP24, SP22, EC7)
//! - [`LoadType`] - Permanent / long-term variable / short-term variable loads
//! - [`LoadFactors`] - Per-method load factor table
//! - [`resistance_factor`] - Per-method resistance divisor (pile design)
//! - [`calculate`] - Combine G, Ql, Qs into a single design load
//!
//! # Example
//!
//! ```
//! use calc_core::loads::DesignMethod;
//!
//! let method = DesignMethod::from_tag("SP22");
//! let design = method.load_factors().design_load(200.0, 50.0, 30.0);
//! assert!((design - (210.0 + 60.0 + 39.0)).abs() < 1e-9);
//!
//! // Unknown tags are not an error: they fall back to the default method
//! assert_eq!(DesignMethod::from_tag("BS8110"), DesignMethod::Sp24);
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{
    calculate,
    resistance_factor,
    LoadCombinationInput,
    LoadCombinationResult,
    LoadFactors,
    EC7_LOAD_FACTORS,
    SP22_LOAD_FACTORS,
    SP24_LOAD_FACTORS,
};
pub use load_types::LoadType;

use serde::{Deserialize, Deserializer, Serialize};

/// Design method selection
///
/// A closed set of partial-factor regimes. On the wire the method is a
/// string tag (`"SP24"`, `"SP22"`, `"EC7"`); a missing, null, empty, or
/// unrecognized tag decodes to the default, [`DesignMethod::Sp24`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum DesignMethod {
    /// SP24-like pile/foundation regime (default)
    #[default]
    #[serde(rename = "SP24")]
    Sp24,
    /// SP22-like foundation regime
    #[serde(rename = "SP22")]
    Sp22,
    /// EC7-like geotechnical regime (STR/GEO)
    #[serde(rename = "EC7")]
    Ec7,
}

impl DesignMethod {
    /// All methods in table order
    pub const ALL: [DesignMethod; 3] = [DesignMethod::Sp24, DesignMethod::Sp22, DesignMethod::Ec7];

    /// Resolve a wire tag. Anything unrecognized resolves to the default.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "SP22" => DesignMethod::Sp22,
            "EC7" => DesignMethod::Ec7,
            "SP24" => DesignMethod::Sp24,
            other => {
                if !other.is_empty() {
                    tracing::debug!(tag = other, "unrecognized design method, using SP24 factors");
                }
                DesignMethod::default()
            }
        }
    }

    /// Short code
    pub fn code(&self) -> &'static str {
        match self {
            DesignMethod::Sp24 => "SP24",
            DesignMethod::Sp22 => "SP22",
            DesignMethod::Ec7 => "EC7",
        }
    }

    /// Load factor table entry for this method
    pub fn load_factors(&self) -> LoadFactors {
        match self {
            DesignMethod::Sp24 => SP24_LOAD_FACTORS,
            DesignMethod::Sp22 => SP22_LOAD_FACTORS,
            DesignMethod::Ec7 => EC7_LOAD_FACTORS,
        }
    }

    /// Resistance divisor γR for this method
    pub fn resistance_factor(&self) -> f64 {
        resistance_factor(*self)
    }
}

impl std::fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl<'de> Deserialize<'de> for DesignMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.as_deref().map(DesignMethod::from_tag).unwrap_or_default())
    }
}
