//! # Fillet Weld Shear Check
//!
//! Shear capacity of a fillet weld using the throat-thickness convention
//! `a = 0.7·s`:
//!
//! ```text
//! V_Rd = a · L · Fvw / γM
//! ```
//!
//! Defaults: Fvw = 180 MPa, γM = 1.25.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::units::n_to_kn;

/// Throat thickness as a fraction of the weld leg size
pub const THROAT_RATIO: f64 = 0.7;
/// Default weld design shear strength (MPa)
pub const DEFAULT_FVW_MPA: f64 = 180.0;
/// Default partial factor for connections
pub const DEFAULT_GAMMA_M: f64 = 1.25;

/// Apply the Fvw default when unset.
pub fn fvw_or_default(fvw_mpa: f64) -> f64 {
    if fvw_mpa > 0.0 {
        fvw_mpa
    } else {
        DEFAULT_FVW_MPA
    }
}

/// Apply the γM default when unset.
pub fn gamma_m_or_default(gamma_m: f64) -> f64 {
    if gamma_m > 0.0 {
        gamma_m
    } else {
        DEFAULT_GAMMA_M
    }
}

/// Weld shear capacity (kN) for a leg size and length in mm.
pub fn weld_capacity_kn(weld_size_mm: f64, weld_length_mm: f64, fvw_mpa: f64, gamma_m: f64) -> f64 {
    let throat = THROAT_RATIO * weld_size_mm;
    n_to_kn(throat * weld_length_mm * fvw_mpa / gamma_m)
}

/// Input parameters for a weld shear check.
///
/// ## JSON Example
///
/// ```json
/// { "weld_size_mm": 6.0, "weld_length_mm": 200.0, "fvw_mpa": 180.0, "gamma_m": 1.25, "shear_kn": 100.0 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JointInput {
    /// Fillet weld leg size s (mm)
    pub weld_size_mm: f64,
    /// Effective weld length L (mm)
    pub weld_length_mm: f64,
    /// Weld design shear strength (MPa); ≤ 0 uses 180
    pub fvw_mpa: f64,
    /// Partial factor γM; ≤ 0 uses 1.25
    pub gamma_m: f64,
    /// Applied shear (kN)
    pub shear_kn: f64,
}

impl JointInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("weld_size_mm", self.weld_size_mm)?;
        require_positive("weld_length_mm", self.weld_length_mm)?;
        require_positive("shear_kn", self.shear_kn)?;
        Ok(())
    }
}

/// Results from weld shear check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointResult {
    /// Weld shear capacity (kN)
    pub capacity_kn: f64,
    /// Applied shear / capacity
    pub utilization: f64,
    /// `utilization ≤ 1.0`
    pub ok: bool,
    pub notes: String,
}

/// Check a fillet weld in shear.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::joint::{calculate, JointInput};
///
/// let input = JointInput { weld_size_mm: 6.0, weld_length_mm: 200.0, shear_kn: 100.0, ..Default::default() };
/// let result = calculate(&input).unwrap();
/// // 0.7·6·200·180/1.25 = 120,960 N
/// assert!((result.capacity_kn - 120.96).abs() < 1e-9);
/// assert!(result.ok);
/// ```
pub fn calculate(input: &JointInput) -> CalcResult<JointResult> {
    input.validate()?;

    let fvw = fvw_or_default(input.fvw_mpa);
    let gamma_m = gamma_m_or_default(input.gamma_m);

    let capacity = weld_capacity_kn(input.weld_size_mm, input.weld_length_mm, fvw, gamma_m);
    let utilization = input.shear_kn / capacity;

    Ok(JointResult {
        capacity_kn: capacity,
        utilization,
        ok: utilization <= 1.0,
        notes: "Placeholder. Weld design is not covered by SP63.".to_string(),
    })
}
