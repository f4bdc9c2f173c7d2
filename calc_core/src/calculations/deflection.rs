//! # Deflection Check
//!
//! Standalone serviceability check of a simply-supported rectangular member
//! under UDL, using the same `5wL⁴/(384EI)` formula as the beam calculator.
//! Defaults: E = 30 GPa, limit L/250.

use serde::{Deserialize, Serialize};

use super::beam::{udl_deflection_mm, DEFAULT_DEFLECTION_LIMIT_RATIO};
use crate::errors::{require_positive, CalcResult};
use crate::materials::RC_E_GPA;
use crate::units::m_to_mm;

/// Input parameters for a deflection check.
///
/// ## JSON Example
///
/// ```json
/// { "span_m": 6.0, "udl_kn_m": 20.0, "e_gpa": 30.0, "width_m": 0.3, "height_m": 0.5, "deflection_limit_ratio": 250 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeflectionInput {
    /// Span (m)
    pub span_m: f64,
    /// Uniformly distributed load (kN/m)
    pub udl_kn_m: f64,
    /// Modulus of elasticity (GPa); ≤ 0 uses 30
    pub e_gpa: f64,
    /// Section width (m)
    pub width_m: f64,
    /// Section height (m)
    pub height_m: f64,
    /// Deflection limit as a span ratio; ≤ 0 uses 250
    pub deflection_limit_ratio: f64,
}

impl DeflectionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        require_positive("udl_kn_m", self.udl_kn_m)?;
        require_positive("width_m", self.width_m)?;
        require_positive("height_m", self.height_m)?;
        Ok(())
    }
}

/// Results from deflection check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeflectionResult {
    /// Midspan deflection (mm)
    pub deflection_mm: f64,
    /// Allowable deflection (mm)
    pub deflection_limit_mm: f64,
    /// `deflection ≤ limit`
    pub ok: bool,
    pub notes: String,
}

/// Check midspan deflection against a span-ratio limit.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::deflection::{calculate, DeflectionInput};
///
/// let input = DeflectionInput {
///     span_m: 6.0,
///     udl_kn_m: 20.0,
///     width_m: 0.3,
///     height_m: 0.5,
///     ..Default::default()
/// };
/// let result = calculate(&input).unwrap();
/// assert!((result.deflection_limit_mm - 24.0).abs() < 1e-9);
/// assert!(result.ok);
/// ```
pub fn calculate(input: &DeflectionInput) -> CalcResult<DeflectionResult> {
    input.validate()?;

    let ratio = if input.deflection_limit_ratio > 0.0 {
        input.deflection_limit_ratio
    } else {
        DEFAULT_DEFLECTION_LIMIT_RATIO
    };
    let e_gpa = if input.e_gpa > 0.0 { input.e_gpa } else { RC_E_GPA };

    let deflection = udl_deflection_mm(
        input.udl_kn_m,
        input.span_m,
        e_gpa,
        m_to_mm(input.width_m),
        m_to_mm(input.height_m),
    );
    let limit = m_to_mm(input.span_m) / ratio;

    Ok(DeflectionResult {
        deflection_mm: deflection,
        deflection_limit_mm: limit,
        ok: deflection <= limit,
        notes: "Deflection check per SP63 assumptions (simplified).".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_member() -> DeflectionInput {
        DeflectionInput {
            span_m: 6.0,
            udl_kn_m: 20.0,
            e_gpa: 0.0,
            width_m: 0.3,
            height_m: 0.5,
            deflection_limit_ratio: 0.0,
        }
    }

    #[test]
    fn test_deflection_with_defaults() {
        let result = calculate(&test_member()).unwrap();
        // I = 300·500³/12 = 3.125e9 mm⁴
        // δ = 5·20·6000⁴/(384·30000·3.125e9) = 3.6 mm
        assert!((result.deflection_mm - 3.6).abs() < 1e-9);
        assert!((result.deflection_limit_mm - 24.0).abs() < 1e-9);
        assert!(result.ok);
    }

    #[test]
    fn test_matches_beam_calculator() {
        use crate::calculations::beam::{self, BeamInput};
        use crate::materials::BeamMaterial;

        let beam_result = beam::calculate(&BeamInput {
            material: BeamMaterial::Rc,
            span_m: 6.0,
            udl_kn_m: 20.0,
            width_m: 0.3,
            height_m: 0.5,
            ..Default::default()
        })
        .unwrap();
        let result = calculate(&test_member()).unwrap();
        assert!((beam_result.deflection_mm - result.deflection_mm).abs() < 1e-9);
    }

    #[test]
    fn test_strict_limit_fails() {
        let mut input = test_member();
        input.deflection_limit_ratio = 2000.0;
        assert!(!calculate(&input).unwrap().ok);
    }

    #[test]
    fn test_height_required() {
        let mut input = test_member();
        input.height_m = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }
}
