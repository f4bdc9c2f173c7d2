//! # Unit Types
//!
//! Type-safe wrappers for the SI units used by the calculators. These are
//! plain f64 newtypes: they serialize as bare numbers and exist so that the
//! unit conversions inside each calculator are explicit and checked by the
//! compiler.
//!
//! ## Conventions
//!
//! Inputs arrive in the units an engineer writes on a calc sheet:
//! - Length: meters (m) for spans and member sizes, millimeters (mm) for
//!   section details
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-meters (kN·m)
//! - Distributed load: kN/m
//! - Stress: megapascals (MPa), moduli in gigapascals (GPa)
//!
//! Section arithmetic runs in N and mm, so every calculator converts to
//! N·mm / MPa before evaluating a formula.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{KnM, Meters, Millimeters, NMm};
//!
//! let span = Meters(6.0);
//! let span_mm: Millimeters = span.into();
//! assert_eq!(span_mm.0, 6000.0);
//!
//! let moment: NMm = KnM(45.0).into();
//! assert_eq!(moment.0, 45.0e6);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * 1.0e6)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed load in kilonewtons per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM(pub f64);

/// Distributed load in newtons per millimeter (numerically equal to kN/m)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NPerMm(pub f64);

impl From<KnPerM> for NPerMm {
    fn from(knm: KnPerM) -> Self {
        NPerMm(knm.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

/// Stress or modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GigaPascals(pub f64);

impl From<GigaPascals> for MegaPascals {
    fn from(gpa: GigaPascals) -> Self {
        MegaPascals(gpa.0 * 1000.0)
    }
}

macro_rules! impl_value {
    ($($type:ty),* $(,)?) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Millimeters, KiloNewtons, NMm, NPerMm, MegaPascals);

/// Convert a length in meters to millimeters.
pub fn m_to_mm(m: f64) -> f64 {
    Millimeters::from(Meters(m)).value()
}

/// Convert a force in newtons to kilonewtons.
pub fn n_to_kn(n: f64) -> f64 {
    KiloNewtons::from(Newtons(n)).value()
}

/// Convert a moment in kN·m to N·mm.
pub fn knm_to_nmm(knm: f64) -> f64 {
    NMm::from(KnM(knm)).value()
}

/// Convert a modulus in GPa to MPa.
pub fn gpa_to_mpa(gpa: f64) -> f64 {
    MegaPascals::from(GigaPascals(gpa)).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(0.3).into();
        assert!((mm.0 - 300.0).abs() < 1e-9);
        assert_eq!(m_to_mm(6.0), 6000.0);
    }

    #[test]
    fn test_newtons_to_kilonewtons() {
        let kn: KiloNewtons = Newtons(2500.0).into();
        assert_eq!(kn.0, 2.5);
        assert_eq!(n_to_kn(1000.0), 1.0);
    }

    #[test]
    fn test_moment_conversion() {
        assert_eq!(knm_to_nmm(1.5), 1.5e6);
    }

    #[test]
    fn test_udl_is_numerically_equal() {
        let w: NPerMm = KnPerM(12.5).into();
        assert_eq!(w.0, 12.5);
    }

    #[test]
    fn test_modulus_conversion() {
        assert_eq!(gpa_to_mpa(30.0), 30_000.0);
    }

    #[test]
    fn test_serialization() {
        let span = Meters(6.5);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, "6.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(span, roundtrip);
    }
}
