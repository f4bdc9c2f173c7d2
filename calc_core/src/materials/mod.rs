//! # Beam Materials
//!
//! Material tags for the non-code beam calculator and the default design
//! properties each one carries when the caller leaves them unset.
//!
//! ## Material Types
//!
//! - **Steel** (`"steel"`): E = 200 GPa, allowable bending stress 235 MPa
//! - **Reinforced concrete** (`"rc"`): E = 30 GPa, allowable bending stress 14 MPa
//!
//! Any tag other than `"rc"` (including an empty or missing one) is treated
//! as steel.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::BeamMaterial;
//!
//! let rc = BeamMaterial::from_tag("rc");
//! assert_eq!(rc.default_e_gpa(), 30.0);
//! assert_eq!(BeamMaterial::from_tag("timber"), BeamMaterial::Steel);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Default modulus of elasticity for steel (GPa)
pub const STEEL_E_GPA: f64 = 200.0;
/// Default allowable bending stress for steel (MPa)
pub const STEEL_FY_MPA: f64 = 235.0;
/// Default modulus of elasticity for reinforced concrete (GPa)
pub const RC_E_GPA: f64 = 30.0;
/// Default allowable bending stress for reinforced concrete (MPa)
pub const RC_FY_MPA: f64 = 14.0;

/// Beam material selector.
///
/// Serializes as its lowercase tag. Deserialization never fails on an
/// unknown tag: it resolves to [`BeamMaterial::Steel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BeamMaterial {
    /// Structural steel
    #[default]
    #[serde(rename = "steel")]
    Steel,
    /// Reinforced concrete
    #[serde(rename = "rc")]
    Rc,
}

impl BeamMaterial {
    /// Resolve a material tag as written in a request or a spreadsheet cell.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim() == "rc" {
            BeamMaterial::Rc
        } else {
            BeamMaterial::Steel
        }
    }

    /// Short tag used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            BeamMaterial::Steel => "steel",
            BeamMaterial::Rc => "rc",
        }
    }

    /// Modulus of elasticity used when the caller leaves `e_gpa` unset
    pub fn default_e_gpa(&self) -> f64 {
        match self {
            BeamMaterial::Steel => STEEL_E_GPA,
            BeamMaterial::Rc => RC_E_GPA,
        }
    }

    /// Allowable bending stress used when the caller leaves `fy_mpa` unset
    pub fn default_fy_mpa(&self) -> f64 {
        match self {
            BeamMaterial::Steel => STEEL_FY_MPA,
            BeamMaterial::Rc => RC_FY_MPA,
        }
    }
}

impl std::fmt::Display for BeamMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl<'de> Deserialize<'de> for BeamMaterial {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.as_deref().map(BeamMaterial::from_tag).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_by_material() {
        assert_eq!(BeamMaterial::Steel.default_e_gpa(), 200.0);
        assert_eq!(BeamMaterial::Steel.default_fy_mpa(), 235.0);
        assert_eq!(BeamMaterial::Rc.default_e_gpa(), 30.0);
        assert_eq!(BeamMaterial::Rc.default_fy_mpa(), 14.0);
    }

    #[test]
    fn test_unknown_tag_is_steel() {
        assert_eq!(BeamMaterial::from_tag(""), BeamMaterial::Steel);
        assert_eq!(BeamMaterial::from_tag("RC"), BeamMaterial::Steel);
        assert_eq!(BeamMaterial::from_tag(" rc "), BeamMaterial::Rc);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&BeamMaterial::Rc).unwrap();
        assert_eq!(json, "\"rc\"");

        let parsed: BeamMaterial = serde_json::from_str("\"rc\"").unwrap();
        assert_eq!(parsed, BeamMaterial::Rc);
        let parsed: BeamMaterial = serde_json::from_str("\"aluminium\"").unwrap();
        assert_eq!(parsed, BeamMaterial::Steel);
        let parsed: BeamMaterial = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, BeamMaterial::Steel);
    }
}
