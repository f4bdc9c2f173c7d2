//! # Rectangular Section Flexure
//!
//! Shared compression-zone solver for singly reinforced rectangular
//! sections (beams and one-meter slab strips).
//!
//! Moment equilibrium about the tension steel gives
//!
//! ```text
//! M = Rb·b·x·(h0 − x/2)   ⇒   0.5·Rb·b·x² − Rb·b·h0·x + M = 0
//! ```
//!
//! The quadratic has two roots. Only a root in `(0, h0]` is physically
//! meaningful; the smaller one is preferred.

use crate::errors::{CalcError, CalcResult};
use crate::units::knm_to_nmm;

/// Check whether a compression-zone depth is inside the section.
pub fn is_valid_root(x_mm: f64, h0_mm: f64) -> bool {
    x_mm > 0.0 && x_mm <= h0_mm
}

/// Pick the physically valid root of the flexure quadratic.
///
/// The smaller root wins if it lies in `(0, h0]`; otherwise the larger root
/// is tried; otherwise there is no valid section.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::flexure::select_root;
///
/// assert_eq!(select_root(40.0, 860.0, 450.0), Some(40.0));
/// assert_eq!(select_root(-5.0, 300.0, 450.0), Some(300.0));
/// assert_eq!(select_root(-5.0, 500.0, 450.0), None);
/// ```
pub fn select_root(x_small: f64, x_large: f64, h0_mm: f64) -> Option<f64> {
    [x_small, x_large]
        .into_iter()
        .find(|&x| is_valid_root(x, h0_mm))
}

/// Solve the compression zone depth `x` (mm).
///
/// # Arguments
///
/// * `moment_knm` - Design moment (kN·m)
/// * `b_mm` - Section width (mm)
/// * `h0_mm` - Effective depth (mm)
/// * `rb_mpa` - Concrete design compressive stress (MPa)
///
/// # Returns
///
/// * `Ok(x)` - Depth of the compression zone
/// * `Err(CalcError::NoValidSection)` - Negative discriminant, or no root in `(0, h0]`
pub fn solve_compression_zone(moment_knm: f64, b_mm: f64, h0_mm: f64, rb_mpa: f64) -> CalcResult<f64> {
    let m = knm_to_nmm(moment_knm);

    let a = 0.5 * rb_mpa * b_mm;
    let b = -rb_mpa * b_mm * h0_mm;
    let c = m;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(CalcError::no_valid_section(format!(
            "Moment {:.2} kN·m exceeds the section's flexural capacity (no real compression zone)",
            moment_knm
        )));
    }

    let sqrt_d = discriminant.sqrt();
    let x_small = (-b - sqrt_d) / (2.0 * a);
    let x_large = (-b + sqrt_d) / (2.0 * a);

    select_root(x_small, x_large, h0_mm).ok_or_else(|| {
        CalcError::no_valid_section(format!(
            "No compression zone root within (0, {:.1}] mm (roots {:.1}, {:.1})",
            h0_mm, x_small, x_large
        ))
    })
}

/// Required tension reinforcement As = Rb·b·x / Rs (mm²)
pub fn required_steel_area(rb_mpa: f64, b_mm: f64, x_mm: f64, rs_mpa: f64) -> f64 {
    rb_mpa * b_mm * x_mm / rs_mpa
}

/// Area of one round bar, π·d²/4 (mm²)
pub fn bar_area_mm2(diameter_mm: f64) -> f64 {
    std::f64::consts::PI * diameter_mm * diameter_mm / 4.0
}
