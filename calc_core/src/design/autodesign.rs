//! Beam auto-sizing
//!
//! Selects the section height at which the bending stress equals the
//! allowable stress, then reports the resulting deflection check.

use serde::{Deserialize, Serialize};

use crate::calculations::beam::{self, BeamInput};
use crate::errors::{require_positive, CalcResult};
use crate::materials::BeamMaterial;

/// Input for beam auto-sizing: a beam without a height.
///
/// ## JSON Example
///
/// ```json
/// { "material": "steel", "span_m": 6.0, "udl_kn_m": 10.0, "width_m": 0.1 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamAutoInput {
    pub material: BeamMaterial,
    /// Allowable bending stress (MPa); ≤ 0 uses the material default
    pub fy_mpa: f64,
    /// Modulus of elasticity (GPa); ≤ 0 uses the material default
    pub e_gpa: f64,
    pub span_m: f64,
    pub udl_kn_m: f64,
    pub width_m: f64,
    /// Deflection limit as a span ratio; ≤ 0 uses 250
    pub deflection_limit_ratio: f64,
}

impl BeamAutoInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        require_positive("udl_kn_m", self.udl_kn_m)?;
        require_positive("width_m", self.width_m)?;
        Ok(())
    }

    /// The equivalent beam check with the height left unset
    pub fn to_beam_input(&self) -> BeamInput {
        BeamInput {
            material: self.material,
            fy_mpa: self.fy_mpa,
            e_gpa: self.e_gpa,
            span_m: self.span_m,
            udl_kn_m: self.udl_kn_m,
            width_m: self.width_m,
            height_m: 0.0,
            deflection_limit_ratio: self.deflection_limit_ratio,
        }
    }
}

/// Auto-sized beam result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamAutoResult {
    /// Selected section height (m)
    pub required_height_m: f64,
    pub stress_mpa: f64,
    pub deflection_mm: f64,
    pub ok_stress: bool,
    pub ok_deflection: bool,
    pub notes: String,
}

/// Size a simply-supported beam so that bending stress is at its limit.
///
/// # Example
///
/// ```rust
/// use calc_core::design::autodesign::{calculate, BeamAutoInput};
///
/// let input = BeamAutoInput { span_m: 6.0, udl_kn_m: 10.0, width_m: 0.1, ..Default::default() };
/// let result = calculate(&input).unwrap();
/// assert!((result.stress_mpa - 235.0).abs() < 1e-6);
/// ```
pub fn calculate(input: &BeamAutoInput) -> CalcResult<BeamAutoResult> {
    input.validate()?;

    let result = beam::calculate(&input.to_beam_input())?;
    tracing::debug!(height_m = result.required_height_m, "beam auto-sized");

    Ok(BeamAutoResult {
        required_height_m: result.required_height_m,
        stress_mpa: result.stress_mpa,
        deflection_mm: result.deflection_mm,
        ok_stress: result.ok_stress,
        ok_deflection: result.ok_deflection,
        notes: "Auto-sized beam (height selected to satisfy stress).".to_string(),
    })
}
