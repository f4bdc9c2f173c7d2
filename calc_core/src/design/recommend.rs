//! Fillet weld size recommendation
//!
//! Inverse of the weld shear check: solve `V = 0.7·s·L·Fvw/γM` for `s`,
//! never recommending less than a 3 mm leg.

use serde::{Deserialize, Serialize};

use crate::calculations::joint::{fvw_or_default, gamma_m_or_default, THROAT_RATIO};
use crate::errors::{require_positive, CalcResult};

/// Smallest weld leg size recommended (mm)
pub const MIN_WELD_SIZE_MM: f64 = 3.0;

/// Input for a weld size recommendation.
///
/// ## JSON Example
///
/// ```json
/// { "shear_kn": 100.0, "weld_length_mm": 200.0, "fvw_mpa": 180.0, "gamma_m": 1.25 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeldRecommendInput {
    pub shear_kn: f64,
    pub weld_length_mm: f64,
    /// Weld design shear strength (MPa); ≤ 0 uses 180
    pub fvw_mpa: f64,
    /// Partial factor γM; ≤ 0 uses 1.25
    pub gamma_m: f64,
}

impl WeldRecommendInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("shear_kn", self.shear_kn)?;
        require_positive("weld_length_mm", self.weld_length_mm)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeldRecommendResult {
    /// Required weld leg size (mm), at least 3
    pub required_size_mm: f64,
    pub notes: String,
}

/// Recommend a fillet weld leg size for a shear force.
///
/// # Example
///
/// ```rust
/// use calc_core::design::recommend::{weld_size, WeldRecommendInput};
///
/// let input = WeldRecommendInput { shear_kn: 5.0, weld_length_mm: 100.0, ..Default::default() };
/// assert_eq!(weld_size(&input).unwrap().required_size_mm, 3.0);
/// ```
pub fn weld_size(input: &WeldRecommendInput) -> CalcResult<WeldRecommendResult> {
    input.validate()?;

    let fvw = fvw_or_default(input.fvw_mpa);
    let gamma_m = gamma_m_or_default(input.gamma_m);

    let size = input.shear_kn * 1000.0 * gamma_m / (THROAT_RATIO * input.weld_length_mm * fvw);

    Ok(WeldRecommendResult {
        required_size_mm: size.max(MIN_WELD_SIZE_MM),
        notes: "Recommended fillet weld size for shear.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::joint::{weld_capacity_kn, DEFAULT_FVW_MPA, DEFAULT_GAMMA_M};

    #[test]
    fn test_inverse_of_capacity() {
        for size in [3.0, 4.5, 6.0, 10.0, 16.0] {
            let shear = weld_capacity_kn(size, 250.0, DEFAULT_FVW_MPA, DEFAULT_GAMMA_M);
            let input = WeldRecommendInput {
                shear_kn: shear,
                weld_length_mm: 250.0,
                ..Default::default()
            };
            let result = weld_size(&input).unwrap();
            assert!((result.required_size_mm - size).abs() < 1e-9);
        }
    }

    #[test]
    fn test_small_welds_clamped() {
        let shear = weld_capacity_kn(1.5, 250.0, DEFAULT_FVW_MPA, DEFAULT_GAMMA_M);
        let input = WeldRecommendInput {
            shear_kn: shear,
            weld_length_mm: 250.0,
            ..Default::default()
        };
        assert_eq!(weld_size(&input).unwrap().required_size_mm, MIN_WELD_SIZE_MM);
    }

    #[test]
    fn test_explicit_strength() {
        let input = WeldRecommendInput {
            shear_kn: 120.96,
            weld_length_mm: 200.0,
            fvw_mpa: 180.0,
            gamma_m: 1.25,
        };
        // 120960·1.25/(0.7·200·180) = 6 mm
        assert!((weld_size(&input).unwrap().required_size_mm - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        let input = WeldRecommendInput {
            shear_kn: 0.0,
            weld_length_mm: 200.0,
            ..Default::default()
        };
        assert!(weld_size(&input).is_err());

        let input = WeldRecommendInput {
            shear_kn: 50.0,
            weld_length_mm: -1.0,
            ..Default::default()
        };
        assert_eq!(weld_size(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }
}
