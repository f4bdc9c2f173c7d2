//! # Simply-Supported Beam Calculation
//!
//! Non-code check of a simply-supported rectangular beam under a uniformly
//! distributed load.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Full-span uniform load: `M = wL²/8`, `δ = 5wL⁴/(384EI)`
//! - Solid rectangular section of width `b` and height `h`
//! - Bending stress compared directly against the material's allowable stress
//!
//! When `height_m` is left unset (≤ 0) the height is back-solved so that the
//! bending stress equals the allowable stress: `W_req = M/fy`,
//! `h = sqrt(6·W_req/b)`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::beam::{calculate, BeamInput};
//! use calc_core::materials::BeamMaterial;
//!
//! let input = BeamInput {
//!     material: BeamMaterial::Steel,
//!     span_m: 6.0,
//!     udl_kn_m: 10.0,
//!     width_m: 0.1,
//!     height_m: 0.3,
//!     ..Default::default()
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.max_moment_knm - 45.0).abs() < 1e-9);
//! println!("Stress: {:.1} MPa, pass: {}", result.stress_mpa, result.ok_stress);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::materials::BeamMaterial;
use crate::units::{gpa_to_mpa, knm_to_nmm, m_to_mm, KnPerM, NPerMm};

/// Default deflection limit ratio (L/250)
pub const DEFAULT_DEFLECTION_LIMIT_RATIO: f64 = 250.0;

/// Input parameters for a simply-supported beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material": "rc",
///   "fy_mpa": 0,
///   "e_gpa": 0,
///   "span_m": 6.0,
///   "udl_kn_m": 25.0,
///   "width_m": 0.3,
///   "height_m": 0.6,
///   "deflection_limit_ratio": 250
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamInput {
    /// Material (`"steel"` or `"rc"`; anything else is steel)
    pub material: BeamMaterial,

    /// Allowable bending stress (MPa); ≤ 0 uses the material default
    pub fy_mpa: f64,

    /// Modulus of elasticity (GPa); ≤ 0 uses the material default
    pub e_gpa: f64,

    /// Span (m)
    pub span_m: f64,

    /// Uniformly distributed load (kN/m)
    pub udl_kn_m: f64,

    /// Section width (m)
    pub width_m: f64,

    /// Section height (m); ≤ 0 back-solves the required height
    pub height_m: f64,

    /// Deflection limit as a span ratio (L/ratio); ≤ 0 uses 250
    pub deflection_limit_ratio: f64,
}

impl BeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        require_positive("udl_kn_m", self.udl_kn_m)?;
        require_positive("width_m", self.width_m)?;
        Ok(())
    }

    /// Copy of the input with every unset default filled in.
    ///
    /// `height_m` is left untouched: an unset height selects the sizing path.
    pub fn with_defaults(&self) -> BeamInput {
        let mut resolved = self.clone();
        if resolved.deflection_limit_ratio <= 0.0 {
            resolved.deflection_limit_ratio = DEFAULT_DEFLECTION_LIMIT_RATIO;
        }
        if resolved.e_gpa <= 0.0 {
            resolved.e_gpa = self.material.default_e_gpa();
        }
        if resolved.fy_mpa <= 0.0 {
            resolved.fy_mpa = self.material.default_fy_mpa();
        }
        resolved
    }

    /// Maximum moment M = wL²/8 (kN·m)
    pub fn max_moment_knm(&self) -> f64 {
        self.udl_kn_m * self.span_m * self.span_m / 8.0
    }
}

/// Results from beam calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_moment_knm": 45.0,
///   "required_height_m": 0.3,
///   "stress_mpa": 30.0,
///   "deflection_mm": 3.75,
///   "deflection_limit_mm": 24.0,
///   "ok_stress": true,
///   "ok_deflection": true,
///   "notes": "Simplified beam check (UDL, simply supported)."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamResult {
    /// Maximum bending moment (kN·m)
    pub max_moment_knm: f64,

    /// Section height used in the checks (m): the given height, or the
    /// back-solved one when no height was given
    pub required_height_m: f64,

    /// Bending stress M/W (MPa)
    pub stress_mpa: f64,

    /// Midspan deflection (mm)
    pub deflection_mm: f64,

    /// Allowable deflection L/ratio (mm)
    pub deflection_limit_mm: f64,

    /// Bending stress ≤ allowable stress
    pub ok_stress: bool,

    /// Deflection ≤ limit
    pub ok_deflection: bool,

    pub notes: String,
}

/// Midspan deflection of a simply-supported rectangular beam under UDL (mm).
///
/// Shared with the standalone deflection check.
pub fn udl_deflection_mm(udl_kn_m: f64, span_m: f64, e_gpa: f64, b_mm: f64, h_mm: f64) -> f64 {
    let i = b_mm * h_mm.powi(3) / 12.0;
    let w = NPerMm::from(KnPerM(udl_kn_m)).value();
    let l = m_to_mm(span_m);
    let e = gpa_to_mpa(e_gpa);
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

/// Calculate bending stress and deflection of a simply-supported beam.
///
/// # Returns
///
/// * `Ok(BeamResult)` - Calculation results with both checks
/// * `Err(CalcError)` - If span, load, or width is not positive
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;
    let input = input.with_defaults();

    let moment = input.max_moment_knm();
    let moment_nmm = knm_to_nmm(moment);

    let b = m_to_mm(input.width_m);
    let mut h = m_to_mm(input.height_m);

    if h <= 0.0 {
        let w_required = moment_nmm / input.fy_mpa;
        h = (6.0 * w_required / b).sqrt();
    }

    let w_section = b * h * h / 6.0;
    let stress = moment_nmm / w_section;

    let deflection = udl_deflection_mm(input.udl_kn_m, input.span_m, input.e_gpa, b, h);
    let deflection_limit = m_to_mm(input.span_m) / input.deflection_limit_ratio;

    Ok(BeamResult {
        max_moment_knm: moment,
        required_height_m: h / 1000.0,
        stress_mpa: stress,
        deflection_mm: deflection,
        deflection_limit_mm: deflection_limit,
        ok_stress: stress <= input.fy_mpa,
        ok_deflection: deflection <= deflection_limit,
        notes: "Simplified beam check (UDL, simply supported).".to_string(),
    })
}
