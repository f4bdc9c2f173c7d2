//! Partial safety factor tables and the load combination calculator
//!
//! Each design method carries two independently tabulated sets of values:
//! the load factors applied to G/Ql/Qs, and a resistance divisor used by the
//! pile calculator. Both are looked up by matching on [`DesignMethod`], so
//! there is no "missing key" case.

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use super::DesignMethod;
use crate::errors::{require_positive, CalcResult};

/// Partial safety factors for one design method.
///
/// # Example
/// ```
/// use calc_core::loads::DesignMethod;
///
/// let factors = DesignMethod::Ec7.load_factors();
/// assert_eq!(factors.design_load(100.0, 10.0, 20.0), 100.0 * 1.35 + 10.0 * 1.5 + 20.0 * 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadFactors {
    /// Combination name reported back to the caller
    pub name: &'static str,
    /// γG - permanent load factor
    pub gamma_g: f64,
    /// γQ,long - long-term variable load factor
    pub gamma_q_long: f64,
    /// γQ,short - short-term variable load factor
    pub gamma_q_short: f64,
}

/// SP24-like factors (also the default for an unrecognized method)
pub const SP24_LOAD_FACTORS: LoadFactors = LoadFactors {
    name: "SP24 basic",
    gamma_g: 1.1,
    gamma_q_long: 1.2,
    gamma_q_short: 1.3,
};

/// SP22-like factors
pub const SP22_LOAD_FACTORS: LoadFactors = LoadFactors {
    name: "SP22 basic",
    gamma_g: 1.05,
    gamma_q_long: 1.2,
    gamma_q_short: 1.3,
};

/// EC7-like factors
pub const EC7_LOAD_FACTORS: LoadFactors = LoadFactors {
    name: "EC7 STR/GEO",
    gamma_g: 1.35,
    gamma_q_long: 1.5,
    gamma_q_short: 1.5,
};

impl LoadFactors {
    /// Factor applied to a given load type
    pub fn factor(&self, load_type: LoadType) -> f64 {
        match load_type {
            LoadType::Permanent => self.gamma_g,
            LoadType::VariableLong => self.gamma_q_long,
            LoadType::VariableShort => self.gamma_q_short,
        }
    }

    /// Design load G·γG + Ql·γQ,long + Qs·γQ,short
    pub fn design_load(&self, g_kn: f64, q_long_kn: f64, q_short_kn: f64) -> f64 {
        g_kn * self.gamma_g + q_long_kn * self.gamma_q_long + q_short_kn * self.gamma_q_short
    }

    /// Human-readable equation (e.g., "1.1G + 1.2Ql + 1.3Qs")
    pub fn equation(&self) -> String {
        LoadType::ALL
            .iter()
            .map(|lt| format!("{}{}", self.factor(*lt), lt.code()))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Resistance divisor γR for pile design, tabulated per method.
///
/// Kept apart from [`LoadFactors`]: the values are maintained separately.
pub fn resistance_factor(method: DesignMethod) -> f64 {
    match method {
        DesignMethod::Sp24 => 1.25,
        DesignMethod::Sp22 => 1.2,
        DesignMethod::Ec7 => 1.1,
    }
}

/// Input for the load combination calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "method": "EC7",
///   "load_g_kn": 500.0,
///   "load_q_long_kn": 120.0,
///   "load_q_short_kn": 80.0
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadCombinationInput {
    /// Design method (missing or unknown resolves to SP24)
    pub method: DesignMethod,
    /// Permanent load G (kN)
    pub load_g_kn: f64,
    /// Long-term variable load Ql (kN)
    pub load_q_long_kn: f64,
    /// Short-term variable load Qs (kN)
    pub load_q_short_kn: f64,
}

impl LoadCombinationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("load_g_kn", self.load_g_kn)
    }
}

/// Result of a load combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombinationResult {
    /// Factored design load (kN)
    pub design_load_kn: f64,
    /// Name of the combination applied
    pub combo_name: String,
    /// Method whose factors were applied
    pub method_used: DesignMethod,
    pub notes: String,
}

/// Combine one permanent and two variable loads into a design load.
///
/// # Example
///
/// ```rust
/// use calc_core::loads::{calculate, DesignMethod, LoadCombinationInput};
///
/// let input = LoadCombinationInput {
///     method: DesignMethod::Sp22,
///     load_g_kn: 100.0,
///     load_q_long_kn: 0.0,
///     load_q_short_kn: 0.0,
/// };
/// let result = calculate(&input).unwrap();
/// assert!((result.design_load_kn - 105.0).abs() < 1e-9);
/// assert_eq!(result.combo_name, "SP22 basic");
/// ```
pub fn calculate(input: &LoadCombinationInput) -> CalcResult<LoadCombinationResult> {
    input.validate()?;

    let factors = input.method.load_factors();
    let design_load_kn = factors.design_load(input.load_g_kn, input.load_q_long_kn, input.load_q_short_kn);

    Ok(LoadCombinationResult {
        design_load_kn,
        combo_name: factors.name.to_string(),
        method_used: input.method,
        notes: "Simplified combination with one permanent and two variable loads.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(method: DesignMethod) -> LoadCombinationInput {
        LoadCombinationInput {
            method,
            load_g_kn: 100.0,
            load_q_long_kn: 50.0,
            load_q_short_kn: 20.0,
        }
    }

    #[test]
    fn test_factor_tables() {
        let sp24 = DesignMethod::Sp24.load_factors();
        assert_eq!((sp24.gamma_g, sp24.gamma_q_long, sp24.gamma_q_short), (1.1, 1.2, 1.3));

        let sp22 = DesignMethod::Sp22.load_factors();
        assert_eq!((sp22.gamma_g, sp22.gamma_q_long, sp22.gamma_q_short), (1.05, 1.2, 1.3));

        let ec7 = DesignMethod::Ec7.load_factors();
        assert_eq!((ec7.gamma_g, ec7.gamma_q_long, ec7.gamma_q_short), (1.35, 1.5, 1.5));
    }

    #[test]
    fn test_resistance_factors() {
        assert_eq!(resistance_factor(DesignMethod::Sp24), 1.25);
        assert_eq!(resistance_factor(DesignMethod::Sp22), 1.2);
        assert_eq!(resistance_factor(DesignMethod::Ec7), 1.1);
    }

    #[test]
    fn test_design_load_per_method() {
        // 100*1.1 + 50*1.2 + 20*1.3 = 196
        let r = calculate(&input(DesignMethod::Sp24)).unwrap();
        assert!((r.design_load_kn - 196.0).abs() < 1e-9);

        // 100*1.35 + 50*1.5 + 20*1.5 = 240
        let r = calculate(&input(DesignMethod::Ec7)).unwrap();
        assert!((r.design_load_kn - 240.0).abs() < 1e-9);
        assert_eq!(r.combo_name, "EC7 STR/GEO");
    }

    #[test]
    fn test_unknown_method_uses_default() {
        let json = r#"{"method": "ACI318", "load_g_kn": 100.0, "load_q_long_kn": 50.0, "load_q_short_kn": 20.0}"#;
        let parsed: LoadCombinationInput = serde_json::from_str(json).unwrap();
        let r = calculate(&parsed).unwrap();
        assert_eq!(r.method_used, DesignMethod::Sp24);
        assert_eq!(r.combo_name, "SP24 basic");
        assert!((r.design_load_kn - 196.0).abs() < 1e-9);
    }

    #[test]
    fn test_permanent_load_required() {
        let mut bad = input(DesignMethod::Sp24);
        bad.load_g_kn = 0.0;
        let err = calculate(&bad).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_variable_loads_may_be_zero() {
        let mut only_g = input(DesignMethod::Sp22);
        only_g.load_q_long_kn = 0.0;
        only_g.load_q_short_kn = 0.0;
        let r = calculate(&only_g).unwrap();
        assert!((r.design_load_kn - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_equation_text() {
        assert_eq!(SP24_LOAD_FACTORS.equation(), "1.1G + 1.2Ql + 1.3Qs");
    }
}
