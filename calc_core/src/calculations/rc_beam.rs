//! # Reinforced Concrete Beam Flexure
//!
//! Simplified rectangular section design with single tension reinforcement.
//!
//! ## Assumptions
//!
//! - Rectangular stress block at Rb over the compression zone `x`
//! - Tension steel at its design stress Rs
//! - Under-reinforced check `x ≤ ξR·h0` (ξR = 0.45 unless given)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::rc_beam::{calculate, RcBeamInput};
//!
//! let input = RcBeamInput {
//!     moment_knm: 120.0,
//!     width_mm: 300.0,
//!     effective_depth_mm: 460.0,
//!     rb_mpa: 14.5,
//!     rs_mpa: 350.0,
//!     xi_r: 0.0, // unset: 0.45
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.ok);
//! assert!(result.as_required_mm2 > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use super::flexure::{required_steel_area, solve_compression_zone};
use crate::errors::{require_positive, CalcResult};

/// Default limiting relative compression zone height ξR
pub const DEFAULT_XI_R: f64 = 0.45;

/// Input parameters for RC beam flexure.
///
/// ## JSON Example
///
/// ```json
/// {
///   "moment_knm": 120.0,
///   "width_mm": 300.0,
///   "effective_depth_mm": 460.0,
///   "rb_mpa": 14.5,
///   "rs_mpa": 350.0,
///   "xi_r": 0.45
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RcBeamInput {
    /// Design bending moment (kN·m)
    pub moment_knm: f64,
    /// Section width b (mm)
    pub width_mm: f64,
    /// Effective depth h0 (mm)
    pub effective_depth_mm: f64,
    /// Concrete design compressive stress Rb (MPa)
    pub rb_mpa: f64,
    /// Reinforcement design tensile stress Rs (MPa)
    pub rs_mpa: f64,
    /// Limiting relative compression zone height ξR (≤ 0 means default 0.45)
    pub xi_r: f64,
}

impl RcBeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("moment_knm", self.moment_knm)?;
        require_positive("width_mm", self.width_mm)?;
        require_positive("effective_depth_mm", self.effective_depth_mm)?;
        require_positive("rb_mpa", self.rb_mpa)?;
        require_positive("rs_mpa", self.rs_mpa)?;
        Ok(())
    }

    /// ξR with the default applied
    pub fn xi_r_or_default(&self) -> f64 {
        if self.xi_r > 0.0 {
            self.xi_r
        } else {
            DEFAULT_XI_R
        }
    }
}

/// Results from RC beam flexure design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcBeamResult {
    /// Compression zone depth x (mm)
    pub compression_zone_x_mm: f64,
    /// Required tension reinforcement As (mm²)
    pub as_required_mm2: f64,
    /// `x ≤ ξR·h0`
    pub ok: bool,
    pub notes: String,
}

impl RcBeamResult {
    /// Check if the section is under-reinforced
    pub fn passes(&self) -> bool {
        self.ok
    }
}

/// Under-reinforced check `x ≤ ξR·h0`; equality passes.
pub fn under_reinforced(x_mm: f64, xi_r: f64, h0_mm: f64) -> bool {
    x_mm <= xi_r * h0_mm
}

/// Design the tension reinforcement of a rectangular RC beam.
pub fn calculate(input: &RcBeamInput) -> CalcResult<RcBeamResult> {
    input.validate()?;

    let xi_r = input.xi_r_or_default();
    let b = input.width_mm;
    let h0 = input.effective_depth_mm;

    let x = solve_compression_zone(input.moment_knm, b, h0, input.rb_mpa)?;
    let as_required = required_steel_area(input.rb_mpa, b, x, input.rs_mpa);

    Ok(RcBeamResult {
        compression_zone_x_mm: x,
        as_required_mm2: as_required,
        ok: under_reinforced(x, xi_r, h0),
        notes: "RC beam flexure per SP63 simplified rectangular section.".to_string(),
    })
}
