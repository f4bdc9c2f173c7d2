//! # Reinforced Concrete Column Axial Capacity
//!
//! Simplified capacity of a centrally loaded rectangular RC column:
//!
//! ```text
//! N = Rb·(A − As) + Rs·As
//! ```
//!
//! Slenderness and eccentricity are not considered.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::n_to_kn;

/// Input parameters for RC column axial capacity.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_mm": 400.0,
///   "height_mm": 400.0,
///   "rb_mpa": 14.5,
///   "rs_mpa": 350.0,
///   "as_mm2": 1256.0,
///   "load_kn": 2000.0
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RcColumnInput {
    /// Section width (mm)
    pub width_mm: f64,
    /// Section height (mm)
    pub height_mm: f64,
    /// Concrete design compressive stress Rb (MPa)
    pub rb_mpa: f64,
    /// Reinforcement design compressive stress Rs (MPa)
    pub rs_mpa: f64,
    /// Total longitudinal reinforcement (mm²); negative is treated as 0
    pub as_mm2: f64,
    /// Applied axial load (kN)
    pub load_kn: f64,
}

impl RcColumnInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_mm", self.width_mm)?;
        require_positive("height_mm", self.height_mm)?;
        require_positive("rb_mpa", self.rb_mpa)?;
        require_positive("rs_mpa", self.rs_mpa)?;
        require_positive("load_kn", self.load_kn)?;
        Ok(())
    }

    /// Gross section area A = b·h (mm²)
    pub fn gross_area_mm2(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}

/// Results from RC column capacity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcColumnResult {
    /// Axial capacity (kN)
    pub capacity_kn: f64,
    /// Applied load / capacity
    pub utilization: f64,
    /// `utilization ≤ 1.0`
    pub ok: bool,
    pub notes: String,
}

/// Check the axial capacity of a rectangular RC column.
///
/// # Returns
///
/// * `Err(CalcError::InvalidSteelArea)` - If `as_mm2` exceeds the gross area
pub fn calculate(input: &RcColumnInput) -> CalcResult<RcColumnResult> {
    input.validate()?;

    let as_mm2 = input.as_mm2.max(0.0);
    let gross = input.gross_area_mm2();
    let net_concrete = gross - as_mm2;
    if net_concrete < 0.0 {
        return Err(CalcError::invalid_steel_area(as_mm2, gross));
    }

    let capacity = n_to_kn(input.rb_mpa * net_concrete + input.rs_mpa * as_mm2);
    let utilization = input.load_kn / capacity;

    Ok(RcColumnResult {
        capacity_kn: capacity,
        utilization,
        ok: utilization <= 1.0,
        notes: "Simplified RC axial capacity per SP63.".to_string(),
    })
}
