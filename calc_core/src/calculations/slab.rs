//! # Reinforced Concrete Slab Flexure
//!
//! Per-meter reinforcement for a one-way slab strip.
//!
//! Two calculations are provided:
//!
//! - [`calculate`] - Rectangular stress-block design of a 1000 mm strip
//!   (same compression-zone solver as [`super::rc_beam`]) with a ξR check
//! - [`estimate`] - Quick lever-arm estimate (`z = 0.9·d`, `As = M / (0.87·fyd·z)`)
//!   with no pass/fail
//!
//! Both convert the required area into a bar spacing for the chosen bar
//! diameter.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::slab::{calculate, SlabInput};
//!
//! let input = SlabInput {
//!     moment_knm_per_m: 25.0,
//!     effective_depth_mm: 150.0,
//!     rb_mpa: 11.5,
//!     rs_mpa: 350.0,
//!     bar_diameter_mm: 12.0,
//!     xi_r: 0.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!(result.spacing_mm > 100.0 && result.spacing_mm < 300.0);
//! ```

use serde::{Deserialize, Serialize};

use super::flexure::{bar_area_mm2, required_steel_area, solve_compression_zone};
use super::rc_beam::DEFAULT_XI_R;
use crate::errors::{require_positive, CalcResult};
use crate::units::knm_to_nmm;

/// Width of the design strip (mm)
pub const STRIP_WIDTH_MM: f64 = 1000.0;

/// Input parameters for slab strip design.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlabInput {
    /// Design moment per meter width (kN·m/m)
    pub moment_knm_per_m: f64,
    /// Effective depth h0 (mm)
    pub effective_depth_mm: f64,
    /// Concrete design compressive stress Rb (MPa)
    pub rb_mpa: f64,
    /// Reinforcement design tensile stress Rs (MPa)
    pub rs_mpa: f64,
    /// Bar diameter (mm)
    pub bar_diameter_mm: f64,
    /// Limiting relative compression zone height ξR (≤ 0 means default 0.45)
    pub xi_r: f64,
}

impl SlabInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("moment_knm_per_m", self.moment_knm_per_m)?;
        require_positive("effective_depth_mm", self.effective_depth_mm)?;
        require_positive("rb_mpa", self.rb_mpa)?;
        require_positive("rs_mpa", self.rs_mpa)?;
        require_positive("bar_diameter_mm", self.bar_diameter_mm)?;
        Ok(())
    }
}

/// Results from slab strip design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabResult {
    /// Required reinforcement per meter (mm²/m)
    pub as_required_mm2_per_m: f64,
    /// Area of one bar (mm²)
    pub bar_area_mm2: f64,
    /// Bar spacing providing the required area (mm)
    pub spacing_mm: f64,
    /// `x ≤ ξR·h0`
    pub ok: bool,
    pub notes: String,
}

/// Design a one-meter slab strip.
pub fn calculate(input: &SlabInput) -> CalcResult<SlabResult> {
    input.validate()?;

    let xi_r = if input.xi_r > 0.0 { input.xi_r } else { DEFAULT_XI_R };
    let h0 = input.effective_depth_mm;

    let x = solve_compression_zone(input.moment_knm_per_m, STRIP_WIDTH_MM, h0, input.rb_mpa)?;
    let as_required = required_steel_area(input.rb_mpa, STRIP_WIDTH_MM, x, input.rs_mpa);
    let bar_area = bar_area_mm2(input.bar_diameter_mm);

    Ok(SlabResult {
        as_required_mm2_per_m: as_required,
        bar_area_mm2: bar_area,
        spacing_mm: bar_area * STRIP_WIDTH_MM / as_required,
        ok: x <= xi_r * h0,
        notes: "RC slab flexure per SP63 simplified rectangular section.".to_string(),
    })
}

/// Input for the lever-arm reinforcement estimate.
///
/// ## JSON Example
///
/// ```json
/// { "moment_knm_per_m": 25.0, "effective_depth_mm": 150.0, "fyd_mpa": 435.0, "bar_diameter_mm": 12.0 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlabEstimateInput {
    /// Design moment per meter width (kN·m/m)
    pub moment_knm_per_m: f64,
    /// Effective depth d (mm)
    pub effective_depth_mm: f64,
    /// Reinforcement design yield stress fyd (MPa)
    pub fyd_mpa: f64,
    /// Bar diameter (mm)
    pub bar_diameter_mm: f64,
}

impl SlabEstimateInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("moment_knm_per_m", self.moment_knm_per_m)?;
        require_positive("effective_depth_mm", self.effective_depth_mm)?;
        require_positive("fyd_mpa", self.fyd_mpa)?;
        require_positive("bar_diameter_mm", self.bar_diameter_mm)?;
        Ok(())
    }
}

/// Results from the lever-arm estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabEstimateResult {
    pub as_required_mm2_per_m: f64,
    pub bar_area_mm2: f64,
    pub spacing_mm: f64,
    pub notes: String,
}

/// Estimate single-layer slab reinforcement with a fixed lever arm.
///
/// `z = 0.9·d`, `As = M / (0.87·fyd·z)`.
pub fn estimate(input: &SlabEstimateInput) -> CalcResult<SlabEstimateResult> {
    input.validate()?;

    let z = 0.9 * input.effective_depth_mm;
    let as_required = knm_to_nmm(input.moment_knm_per_m) / (0.87 * input.fyd_mpa * z);
    let bar_area = bar_area_mm2(input.bar_diameter_mm);

    Ok(SlabEstimateResult {
        as_required_mm2_per_m: as_required,
        bar_area_mm2: bar_area,
        spacing_mm: bar_area * STRIP_WIDTH_MM / as_required,
        notes: "Single-layer slab reinforcement estimate.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_slab() -> SlabInput {
        SlabInput {
            moment_knm_per_m: 25.0,
            effective_depth_mm: 150.0,
            rb_mpa: 11.5,
            rs_mpa: 350.0,
            bar_diameter_mm: 12.0,
            xi_r: 0.0,
        }
    }

    #[test]
    fn test_strip_design() {
        let result = calculate(&test_slab()).unwrap();
        // 5750·x² − 1,725,000·x + 25e6 = 0 → x ≈ 15.3 mm
        // As = 11.5·1000·15.3/350 ≈ 503 mm²/m
        assert!((result.as_required_mm2_per_m - 503.0).abs() < 5.0);
        assert!(result.ok);
    }

    #[test]
    fn test_spacing_relation() {
        let result = calculate(&test_slab()).unwrap();
        let expected = result.bar_area_mm2 * 1000.0 / result.as_required_mm2_per_m;
        assert!((result.spacing_mm - expected).abs() < 1e-9);
    }

    #[test]
    fn test_slab_no_valid_section() {
        let mut input = test_slab();
        // Quadratic maximum: 0.5·11.5·1000·150² ≈ 129 kN·m/m
        input.moment_knm_per_m = 200.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "NO_VALID_SECTION");
    }

    #[test]
    fn test_slab_missing_bar_diameter() {
        let mut input = test_slab();
        input.bar_diameter_mm = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_estimate() {
        let input = SlabEstimateInput {
            moment_knm_per_m: 25.0,
            effective_depth_mm: 150.0,
            fyd_mpa: 435.0,
            bar_diameter_mm: 12.0,
        };
        let result = estimate(&input).unwrap();
        // As = 25e6 / (0.87·435·135) ≈ 489 mm²/m
        assert!((result.as_required_mm2_per_m - 489.3).abs() < 1.0);
        // 113.1·1000/489.3 ≈ 231 mm
        assert!((result.spacing_mm - 231.1).abs() < 1.0);
    }

    #[test]
    fn test_estimate_invalid() {
        let input = SlabEstimateInput {
            moment_knm_per_m: 25.0,
            effective_depth_mm: 150.0,
            fyd_mpa: 0.0,
            bar_diameter_mm: 12.0,
        };
        assert!(estimate(&input).is_err());
    }
}
