//! # Column Buckling Calculation
//!
//! Euler buckling check of a slender rectangular column.
//!
//! ## Assumptions
//!
//! - Elastic buckling about the axis with `I = b·h³/12`
//! - Effective length `K·L` (K = 1.0 for pin-pin unless given)
//! - Concentric axial load only
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::column::{calculate, ColumnInput};
//!
//! let input = ColumnInput {
//!     length_m: 3.0,
//!     k_factor: 1.0,
//!     width_m: 0.1,
//!     height_m: 0.1,
//!     e_gpa: 200.0,
//!     load_kn: 500.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.pcr_kn > 1800.0);
//! assert!(result.ok);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::units::{gpa_to_mpa, m_to_mm, n_to_kn};

/// Default effective length factor (pin-pin)
pub const DEFAULT_K_FACTOR: f64 = 1.0;
/// Default modulus of elasticity (GPa)
pub const DEFAULT_E_GPA: f64 = 200.0;

/// Input parameters for a column buckling check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_m": 3.0,
///   "k_factor": 1.0,
///   "width_m": 0.1,
///   "height_m": 0.1,
///   "e_gpa": 200.0,
///   "load_kn": 500.0
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnInput {
    /// Unbraced length L (m)
    pub length_m: f64,

    /// Effective length factor K; ≤ 0 uses 1.0
    pub k_factor: f64,

    /// Section width b (m)
    pub width_m: f64,

    /// Section height h (m), the dimension cubed in I
    pub height_m: f64,

    /// Modulus of elasticity (GPa); ≤ 0 uses 200
    pub e_gpa: f64,

    /// Applied axial load (kN)
    pub load_kn: f64,
}

impl ColumnInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_m", self.length_m)?;
        require_positive("width_m", self.width_m)?;
        require_positive("height_m", self.height_m)?;
        require_positive("load_kn", self.load_kn)?;
        Ok(())
    }

    /// Second moment of area I = b·h³/12 (mm⁴)
    pub fn moment_of_inertia_mm4(&self) -> f64 {
        m_to_mm(self.width_m) * m_to_mm(self.height_m).powi(3) / 12.0
    }

    /// Effective length K·L (mm) with the default K applied
    pub fn effective_length_mm(&self) -> f64 {
        let k = if self.k_factor > 0.0 { self.k_factor } else { DEFAULT_K_FACTOR };
        k * m_to_mm(self.length_m)
    }
}

/// Results from column buckling check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnResult {
    /// Second moment of area (mm⁴)
    pub ixx_mm4: f64,

    /// Euler critical load (kN)
    pub pcr_kn: f64,

    /// Applied load / critical load
    pub utilization: f64,

    /// `utilization ≤ 1.0`
    pub ok: bool,

    pub notes: String,
}

impl ColumnResult {
    /// Check if the column passes (utilization ≤ 1.0)
    pub fn passes(&self) -> bool {
        self.ok
    }
}

/// Euler critical load Pcr = π²EI/(KL)² (kN)
pub fn euler_critical_load_kn(e_mpa: f64, i_mm4: f64, effective_length_mm: f64) -> f64 {
    let pcr_n = std::f64::consts::PI.powi(2) * e_mpa * i_mm4 / effective_length_mm.powi(2);
    n_to_kn(pcr_n)
}

/// Check a column against Euler buckling.
pub fn calculate(input: &ColumnInput) -> CalcResult<ColumnResult> {
    input.validate()?;

    let e_gpa = if input.e_gpa > 0.0 { input.e_gpa } else { DEFAULT_E_GPA };
    let i = input.moment_of_inertia_mm4();
    let pcr = euler_critical_load_kn(gpa_to_mpa(e_gpa), i, input.effective_length_mm());
    let utilization = input.load_kn / pcr;

    Ok(ColumnResult {
        ixx_mm4: i,
        pcr_kn: pcr,
        utilization,
        ok: utilization <= 1.0,
        notes: "Euler buckling check for pinned column.".to_string(),
    })
}
