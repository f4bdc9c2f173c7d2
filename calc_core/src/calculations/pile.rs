//! # Pile Group Capacity
//!
//! Sizes a pile group from a soil-layer profile.
//!
//! ## Method
//!
//! 1. Perimeter `u` and base area `A` from the pile cross-section
//! 2. Shaft resistance: `Σ fi·α·u·Δz` over every layer, where `Δz` is the
//!    part of the layer lying within the embedded length
//!    `[toe − length, toe]`
//! 3. Base resistance: `qb·A`
//! 4. Design resistance: `(shaft + base) / γR` (γR per design method)
//! 5. Design load: `G·γG + Ql·γQ,long + Qs·γQ,short` (factors per method)
//! 6. Pile count: `ceil(load / resistance)`, at least 1
//!
//! Layers may overlap, leave gaps, or lie outside the pile; each one
//! contributes only its own overlap with the embedded length.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::pile::{calculate, Layer, PileInput};
//! use calc_core::loads::DesignMethod;
//!
//! let input = PileInput {
//!     method: DesignMethod::Sp24,
//!     pile_type: "square".to_string(),
//!     side_m: 0.3,
//!     length_m: 10.0,
//!     toe_depth_m: 11.0,
//!     base_qb_kpa: 3000.0,
//!     load_g_kn: 1000.0,
//!     load_q_long_kn: 200.0,
//!     load_q_short_kn: 100.0,
//!     layers: vec![Layer {
//!         from_depth_m: 0.0,
//!         to_depth_m: 20.0,
//!         soil_type: "loam".to_string(),
//!         fi_kpa: 30.0,
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.pile_count >= 1);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::loads::DesignMethod;

/// Pile cross-section shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PileType {
    /// Square section, sized by `side_m`
    Square,
    /// Circular section, sized by `diameter_m`
    Round,
}

impl FromStr for PileType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(PileType::Square),
            "round" => Ok(PileType::Round),
            other => Err(CalcError::invalid_input(
                "pile_type",
                other,
                "Pile type must be \"square\" or \"round\"",
            )),
        }
    }
}

/// One soil layer of the profile.
///
/// Depths are measured downward from the ground surface. `soil_type` and
/// `gamma_kn_m3` are descriptive and do not enter the calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer {
    /// Top of the layer (m)
    pub from_depth_m: f64,
    /// Bottom of the layer (m)
    pub to_depth_m: f64,
    /// Soil description (e.g., "sand", "clay")
    pub soil_type: String,
    /// Unit weight (kN/m³)
    pub gamma_kn_m3: f64,
    /// Unit shaft friction fi (kPa)
    pub fi_kpa: f64,
    /// Adhesion/friction multiplier α; 0 means 1
    pub alpha: f64,
}

impl Layer {
    /// α with the default applied
    pub fn alpha_or_default(&self) -> f64 {
        if self.alpha == 0.0 {
            1.0
        } else {
            self.alpha
        }
    }
}

/// Input parameters for pile group design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "method": "EC7",
///   "pile_type": "round",
///   "diameter_m": 0.4,
///   "length_m": 12.0,
///   "toe_depth_m": 13.0,
///   "base_qb_kpa": 2500.0,
///   "load_g_kn": 1800.0,
///   "load_q_long_kn": 300.0,
///   "load_q_short_kn": 200.0,
///   "layers": [
///     { "from_depth_m": 0.0, "to_depth_m": 4.0, "soil_type": "fill", "gamma_kn_m3": 17.0, "fi_kpa": 10.0, "alpha": 0.8 },
///     { "from_depth_m": 4.0, "to_depth_m": 15.0, "soil_type": "sand", "gamma_kn_m3": 19.0, "fi_kpa": 45.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PileInput {
    /// Design method (missing or unknown resolves to SP24)
    pub method: DesignMethod,
    /// `"square"` or `"round"`
    pub pile_type: String,
    /// Side of a square pile (m)
    pub side_m: f64,
    /// Diameter of a round pile (m)
    pub diameter_m: f64,
    /// Embedded pile length (m)
    pub length_m: f64,
    /// Depth of the pile toe below ground (m)
    pub toe_depth_m: f64,
    /// Base bearing stress qb (kPa)
    pub base_qb_kpa: f64,
    /// Permanent load G (kN)
    pub load_g_kn: f64,
    /// Long-term variable load (kN)
    pub load_q_long_kn: f64,
    /// Short-term variable load (kN)
    pub load_q_short_kn: f64,
    /// Soil profile
    pub layers: Vec<Layer>,
}

impl PileInput {
    /// Validate input parameters and resolve the pile type.
    pub fn validate(&self) -> CalcResult<PileType> {
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Pile length must be positive",
            ));
        }
        let pile_type: PileType = self.pile_type.parse()?;
        match pile_type {
            PileType::Square => require_positive("side_m", self.side_m)?,
            PileType::Round => require_positive("diameter_m", self.diameter_m)?,
        }
        if self.layers.is_empty() {
            return Err(CalcError::invalid_input("layers", "[]", "At least one soil layer is required"));
        }
        Ok(pile_type)
    }

    /// Perimeter (m) and base area (m²) for the given section shape
    pub fn section(&self, pile_type: PileType) -> (f64, f64) {
        match pile_type {
            PileType::Square => (4.0 * self.side_m, self.side_m * self.side_m),
            PileType::Round => (
                std::f64::consts::PI * self.diameter_m,
                std::f64::consts::PI * self.diameter_m * self.diameter_m / 4.0,
            ),
        }
    }
}

/// Results from pile group design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PileResult {
    /// Factored design load on the group (kN)
    pub design_load_kn: f64,
    /// Design resistance of one pile (kN)
    pub design_resistance_kn: f64,
    /// Characteristic shaft resistance of one pile (kN)
    pub shaft_resistance_kn: f64,
    /// Characteristic base resistance of one pile (kN)
    pub base_resistance_kn: f64,
    /// Number of piles required
    pub pile_count: u64,
    /// Design load per pile (kN)
    pub average_load_per_pile: f64,
    /// Method whose factors were applied
    pub method_used: DesignMethod,
    pub notes: String,
}

/// Length of a layer lying within `[top, bottom]` (m), never negative.
pub fn layer_overlap_m(layer: &Layer, top_m: f64, bottom_m: f64) -> f64 {
    (layer.to_depth_m.min(bottom_m) - layer.from_depth_m.max(top_m)).max(0.0)
}

/// Shaft resistance Σ fi·α·u·Δz (kN) over the embedded length ending at `toe_depth_m`.
pub fn shaft_resistance(layers: &[Layer], perimeter_m: f64, toe_depth_m: f64, length_m: f64) -> f64 {
    let top = toe_depth_m - length_m;
    layers
        .iter()
        .map(|layer| {
            let overlap = layer_overlap_m(layer, top, toe_depth_m);
            layer.fi_kpa * layer.alpha_or_default() * perimeter_m * overlap
        })
        .sum()
}

/// Size a pile group for the given loads and soil profile.
pub fn calculate(input: &PileInput) -> CalcResult<PileResult> {
    let pile_type = input.validate()?;
    let (perimeter, area) = input.section(pile_type);

    let shaft = shaft_resistance(&input.layers, perimeter, input.toe_depth_m, input.length_m);
    let base = input.base_qb_kpa * area;
    let total_resistance = shaft + base;

    let design_load = input
        .method
        .load_factors()
        .design_load(input.load_g_kn, input.load_q_long_kn, input.load_q_short_kn);
    let design_resistance = total_resistance / input.method.resistance_factor();

    let (pile_count, average_load) = if design_resistance > 0.0 {
        // Saturates at u64::MAX only for a vanishing resistance
        let count = (design_load / design_resistance).ceil().max(1.0) as u64;
        (count, design_load / count as f64)
    } else {
        tracing::debug!(
            shaft_kn = shaft,
            base_kn = base,
            "pile has no positive design resistance, pile count left at 0"
        );
        (0, 0.0)
    };

    Ok(PileResult {
        design_load_kn: design_load,
        design_resistance_kn: design_resistance,
        shaft_resistance_kn: shaft,
        base_resistance_kn: base,
        pile_count,
        average_load_per_pile: average_load,
        method_used: input.method,
        notes: "Placeholder. Pile foundations are not governed by SP63.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(from: f64, to: f64, fi: f64, alpha: f64) -> Layer {
        Layer {
            from_depth_m: from,
            to_depth_m: to,
            soil_type: "sand".to_string(),
            gamma_kn_m3: 18.0,
            fi_kpa: fi,
            alpha,
        }
    }

    fn test_pile() -> PileInput {
        PileInput {
            method: DesignMethod::Sp24,
            pile_type: "square".to_string(),
            side_m: 0.3,
            diameter_m: 0.0,
            length_m: 10.0,
            toe_depth_m: 11.0,
            base_qb_kpa: 3000.0,
            load_g_kn: 1000.0,
            load_q_long_kn: 200.0,
            load_q_short_kn: 100.0,
            layers: vec![layer(0.0, 5.0, 20.0, 0.0), layer(5.0, 20.0, 40.0, 0.8)],
        }
    }

    #[test]
    fn test_layer_outside_contributes_zero() {
        // Embedded length [1, 11]
        assert_eq!(layer_overlap_m(&layer(11.0, 15.0, 50.0, 1.0), 1.0, 11.0), 0.0);
        assert_eq!(layer_overlap_m(&layer(0.0, 0.5, 50.0, 1.0), 1.0, 11.0), 0.0);
        let shaft = shaft_resistance(&[layer(12.0, 20.0, 50.0, 1.0)], 1.2, 11.0, 10.0);
        assert_eq!(shaft, 0.0);
    }

    #[test]
    fn test_layer_inside_contributes_full_thickness() {
        let shaft = shaft_resistance(&[layer(3.0, 7.0, 25.0, 0.5)], 1.2, 11.0, 10.0);
        // 25·0.5·1.2·4 = 60
        assert!((shaft - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_alpha_means_one() {
        let zero = shaft_resistance(&[layer(3.0, 7.0, 25.0, 0.0)], 1.2, 11.0, 10.0);
        let one = shaft_resistance(&[layer(3.0, 7.0, 25.0, 1.0)], 1.2, 11.0, 10.0);
        assert_eq!(zero, one);
    }

    #[test]
    fn test_overlapping_layers_both_count() {
        let shaft = shaft_resistance(
            &[layer(2.0, 6.0, 10.0, 1.0), layer(4.0, 8.0, 10.0, 1.0)],
            1.0,
            11.0,
            10.0,
        );
        // 4 m + 4 m at 10 kPa
        assert!((shaft - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_square_pile_group() {
        let result = calculate(&test_pile()).unwrap();
        // u = 1.2 m, A = 0.09 m²
        // Shaft: layer 1 overlap [1,5] = 4 m → 20·1·1.2·4 = 96
        //        layer 2 overlap [5,11] = 6 m → 40·0.8·1.2·6 = 230.4
        assert!((result.shaft_resistance_kn - 326.4).abs() < 1e-9);
        assert!((result.base_resistance_kn - 270.0).abs() < 1e-9);
        // R = 596.4 / 1.25 = 477.12
        assert!((result.design_resistance_kn - 477.12).abs() < 1e-9);
        // N = 1000·1.1 + 200·1.2 + 100·1.3 = 1470 → ceil(3.08) = 4
        assert!((result.design_load_kn - 1470.0).abs() < 1e-9);
        assert_eq!(result.pile_count, 4);
        assert!((result.average_load_per_pile - 367.5).abs() < 1e-9);
        assert_eq!(result.method_used, DesignMethod::Sp24);
    }

    #[test]
    fn test_round_pile_section() {
        let mut input = test_pile();
        input.pile_type = "round".to_string();
        input.diameter_m = 0.4;
        let (u, a) = input.section(PileType::Round);
        assert!((u - std::f64::consts::PI * 0.4).abs() < 1e-12);
        assert!((a - std::f64::consts::PI * 0.04).abs() < 1e-12);
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_method_changes_factors() {
        let mut input = test_pile();
        input.method = DesignMethod::Ec7;
        let result = calculate(&input).unwrap();
        // 1000·1.35 + 200·1.5 + 100·1.5 = 1800
        assert!((result.design_load_kn - 1800.0).abs() < 1e-9);
        assert!((result.design_resistance_kn - 596.4 / 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_small_load_needs_one_pile() {
        let mut input = test_pile();
        input.load_g_kn = 1.0;
        input.load_q_long_kn = 0.0;
        input.load_q_short_kn = 0.0;
        assert_eq!(calculate(&input).unwrap().pile_count, 1);
    }

    #[test]
    fn test_tiny_resistance_count_exceeds_u32() {
        let mut input = test_pile();
        input.base_qb_kpa = 1e-9;
        input.layers = vec![layer(0.0, 20.0, 0.0, 1.0)];
        let result = calculate(&input).unwrap();
        // R = 1e-9·0.09/1.25 = 7.2e-11 kN → about 2.04e13 piles
        assert!(result.pile_count > u64::from(u32::MAX));
        let expected = (result.design_load_kn / result.design_resistance_kn).ceil();
        assert_eq!(result.pile_count as f64, expected);
    }

    #[test]
    fn test_zero_resistance() {
        let mut input = test_pile();
        input.base_qb_kpa = 0.0;
        input.layers = vec![layer(0.0, 20.0, 0.0, 1.0)];
        let result = calculate(&input).unwrap();
        assert_eq!(result.pile_count, 0);
        assert_eq!(result.average_load_per_pile, 0.0);
    }

    #[test]
    fn test_validation() {
        let mut input = test_pile();
        input.length_m = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_pile();
        input.pile_type = "hexagonal".to_string();
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = test_pile();
        input.side_m = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_pile();
        input.pile_type = "round".to_string();
        assert!(calculate(&input).is_err(), "round pile without diameter");

        let mut input = test_pile();
        input.layers.clear();
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_json_input() {
        let json = r#"{
            "method": "SP22",
            "pile_type": "round",
            "diameter_m": 0.4,
            "length_m": 12.0,
            "toe_depth_m": 13.0,
            "base_qb_kpa": 2500.0,
            "load_g_kn": 1800.0,
            "layers": [
                { "from_depth_m": 0.0, "to_depth_m": 15.0, "soil_type": "sand", "fi_kpa": 45.0 }
            ]
        }"#;
        let input: PileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.method, DesignMethod::Sp22);
        let result = calculate(&input).unwrap();
        let out = serde_json::to_value(&result).unwrap();
        assert_eq!(out["method_used"], "SP22");
        assert!(out["pile_count"].as_u64().unwrap() >= 1);
    }
}
