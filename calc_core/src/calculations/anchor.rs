//! # Anchor Bolt Group Check
//!
//! Combined tension and shear on a group of anchor bolts, checked with an
//! elliptical interaction:
//!
//! ```text
//! (T / N_Rd)² + (V / V_Rd)² ≤ 1
//! N_Rd = n · A · fy / γM
//! V_Rd = 0.6 · n · A · fy / γM
//! ```
//!
//! Only steel failure of the bolts is covered; concrete cone, pull-out and
//! pry-out modes are not.

use serde::{Deserialize, Serialize};

use super::flexure::bar_area_mm2;
use super::joint::gamma_m_or_default;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::n_to_kn;

/// Shear strength as a fraction of tensile strength
pub const SHEAR_RATIO: f64 = 0.6;

/// Input parameters for an anchor bolt group.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bolt_diameter_mm": 20.0,
///   "bolt_count": 4,
///   "fy_mpa": 240.0,
///   "gamma_m": 1.25,
///   "tension_kn": 80.0,
///   "shear_kn": 40.0
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorInput {
    /// Nominal bolt diameter (mm)
    pub bolt_diameter_mm: f64,
    /// Number of bolts in the group
    pub bolt_count: i32,
    /// Bolt yield stress (MPa)
    pub fy_mpa: f64,
    /// Partial factor γM; ≤ 0 uses 1.25
    pub gamma_m: f64,
    /// Tension on the group (kN)
    pub tension_kn: f64,
    /// Shear on the group (kN)
    pub shear_kn: f64,
}

impl AnchorInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("bolt_diameter_mm", self.bolt_diameter_mm)?;
        if self.bolt_count <= 0 {
            return Err(CalcError::invalid_input(
                "bolt_count",
                self.bolt_count.to_string(),
                "At least one bolt is required",
            ));
        }
        require_positive("fy_mpa", self.fy_mpa)?;
        if self.tension_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "tension_kn",
                self.tension_kn.to_string(),
                "Tension cannot be negative",
            ));
        }
        if self.shear_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "shear_kn",
                self.shear_kn.to_string(),
                "Shear cannot be negative",
            ));
        }
        if self.tension_kn == 0.0 && self.shear_kn == 0.0 {
            return Err(CalcError::invalid_input(
                "tension_kn",
                "0",
                "Tension or shear must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from anchor bolt group check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorResult {
    /// Group tension capacity N_Rd (kN)
    pub tension_capacity_kn: f64,
    /// Group shear capacity V_Rd (kN)
    pub shear_capacity_kn: f64,
    /// Interaction ratio (T/N_Rd)² + (V/V_Rd)²
    pub utilization: f64,
    /// `utilization ≤ 1.0`
    pub ok: bool,
    pub notes: String,
}

/// Check an anchor bolt group under combined tension and shear.
pub fn calculate(input: &AnchorInput) -> CalcResult<AnchorResult> {
    input.validate()?;

    let gamma_m = gamma_m_or_default(input.gamma_m);
    let area = bar_area_mm2(input.bolt_diameter_mm);
    let n = f64::from(input.bolt_count);

    let nrd = n_to_kn(n * area * input.fy_mpa / gamma_m);
    let vrd = n_to_kn(n * SHEAR_RATIO * area * input.fy_mpa / gamma_m);
    let utilization = (input.tension_kn / nrd).powi(2) + (input.shear_kn / vrd).powi(2);

    Ok(AnchorResult {
        tension_capacity_kn: nrd,
        shear_capacity_kn: vrd,
        utilization,
        ok: utilization <= 1.0,
        notes: "Placeholder. Anchors are not covered by SP63; concrete failure modes not included."
            .to_string(),
    })
}
