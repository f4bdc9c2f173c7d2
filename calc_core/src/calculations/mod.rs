//! # Structural Calculations
//!
//! This module contains all structural calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, missing fields read as 0)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! A field left at 0 (or any non-positive value) means "unset" wherever a
//! default exists; defaults are applied after validation.
//!
//! ## Available Calculations
//!
//! - [`rc_beam`] - RC rectangular beam flexure
//! - [`slab`] - RC slab strip flexure and single-layer estimate
//! - [`beam`] - Simply-supported beam check (steel or RC)
//! - [`column`] - Euler buckling of a rectangular member
//! - [`rc_column`] - RC column axial capacity
//! - [`pile`] - Pile capacity and pile count
//! - [`joint`] - Fillet weld shear check
//! - [`anchor`] - Anchor bolt group tension/shear
//! - [`deflection`] - Standalone deflection check
//!
//! [`CalculationItem`] routes a tagged JSON request to any of the above, as
//! well as to the load combination and the `design` orchestrators.

pub mod anchor;
pub mod beam;
pub mod column;
pub mod deflection;
pub mod flexure;
pub mod joint;
pub mod pile;
pub mod rc_beam;
pub mod rc_column;
pub mod slab;

use serde::{Deserialize, Serialize};

use crate::design::{
    autodesign::{self, BeamAutoInput, BeamAutoResult},
    batch::{self, BeamBatchInput, BeamBatchResult},
    recommend::{self, WeldRecommendInput, WeldRecommendResult},
};
use crate::errors::CalcResult;
use crate::loads::combinations::{self, LoadCombinationInput, LoadCombinationResult};

// Re-export commonly used types
pub use anchor::{AnchorInput, AnchorResult};
pub use beam::{BeamInput, BeamResult};
pub use column::{ColumnInput, ColumnResult};
pub use deflection::{DeflectionInput, DeflectionResult};
pub use joint::{JointInput, JointResult};
pub use pile::{Layer, PileInput, PileResult, PileType};
pub use rc_beam::{RcBeamInput, RcBeamResult};
pub use rc_column::{RcColumnInput, RcColumnResult};
pub use slab::{SlabEstimateInput, SlabEstimateResult, SlabInput, SlabResult};

/// Enum wrapper for every calculation request.
///
/// ## JSON Example
///
/// ```json
/// { "calculator": "rc_column", "input": { "width_mm": 400, "height_mm": 400, "rb_mpa": 14.5, "rs_mpa": 350, "as_mm2": 1256, "load_kn": 2000 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", content = "input", rename_all = "snake_case")]
pub enum CalculationItem {
    /// Design load combination
    Loads(LoadCombinationInput),
    /// RC beam flexure
    RcBeam(RcBeamInput),
    /// RC slab strip flexure
    Slab(SlabInput),
    /// Single-layer slab reinforcement estimate
    SlabEstimate(SlabEstimateInput),
    /// Simply-supported beam check
    Beam(BeamInput),
    /// Euler buckling check
    Column(ColumnInput),
    /// RC column axial capacity
    RcColumn(RcColumnInput),
    /// Pile capacity
    Pile(PileInput),
    /// Fillet weld shear
    Joint(JointInput),
    /// Anchor bolt group
    Anchor(AnchorInput),
    /// Deflection check
    Deflection(DeflectionInput),
    /// Beam auto-sizing
    AutoBeam(BeamAutoInput),
    /// Batch of beam checks
    BatchBeam(BeamBatchInput),
    /// Fillet weld size recommendation
    WeldRecommend(WeldRecommendInput),
}

/// Result of a dispatched calculation, serialized as the plain result record.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CalculationOutput {
    Loads(LoadCombinationResult),
    RcBeam(RcBeamResult),
    Slab(SlabResult),
    SlabEstimate(SlabEstimateResult),
    Beam(BeamResult),
    Column(ColumnResult),
    RcColumn(RcColumnResult),
    Pile(PileResult),
    Joint(JointResult),
    Anchor(AnchorResult),
    Deflection(DeflectionResult),
    AutoBeam(BeamAutoResult),
    BatchBeam(BeamBatchResult),
    WeldRecommend(WeldRecommendResult),
}

impl CalculationItem {
    /// Get the calculator tag as used on the wire
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Loads(_) => "loads",
            CalculationItem::RcBeam(_) => "rc_beam",
            CalculationItem::Slab(_) => "slab",
            CalculationItem::SlabEstimate(_) => "slab_estimate",
            CalculationItem::Beam(_) => "beam",
            CalculationItem::Column(_) => "column",
            CalculationItem::RcColumn(_) => "rc_column",
            CalculationItem::Pile(_) => "pile",
            CalculationItem::Joint(_) => "joint",
            CalculationItem::Anchor(_) => "anchor",
            CalculationItem::Deflection(_) => "deflection",
            CalculationItem::AutoBeam(_) => "auto_beam",
            CalculationItem::BatchBeam(_) => "batch_beam",
            CalculationItem::WeldRecommend(_) => "weld_recommend",
        }
    }

    /// Run the calculator this request names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::calculations::CalculationItem;
    ///
    /// let json = r#"{"calculator": "loads", "input": {"method": "EC7", "load_g_kn": 100}}"#;
    /// let item: CalculationItem = serde_json::from_str(json).unwrap();
    /// let output = serde_json::to_value(item.calculate().unwrap()).unwrap();
    /// assert_eq!(output["method_used"], "EC7");
    /// ```
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        let output = match self {
            CalculationItem::Loads(input) => CalculationOutput::Loads(combinations::calculate(input)?),
            CalculationItem::RcBeam(input) => CalculationOutput::RcBeam(rc_beam::calculate(input)?),
            CalculationItem::Slab(input) => CalculationOutput::Slab(slab::calculate(input)?),
            CalculationItem::SlabEstimate(input) => CalculationOutput::SlabEstimate(slab::estimate(input)?),
            CalculationItem::Beam(input) => CalculationOutput::Beam(beam::calculate(input)?),
            CalculationItem::Column(input) => CalculationOutput::Column(column::calculate(input)?),
            CalculationItem::RcColumn(input) => CalculationOutput::RcColumn(rc_column::calculate(input)?),
            CalculationItem::Pile(input) => CalculationOutput::Pile(pile::calculate(input)?),
            CalculationItem::Joint(input) => CalculationOutput::Joint(joint::calculate(input)?),
            CalculationItem::Anchor(input) => CalculationOutput::Anchor(anchor::calculate(input)?),
            CalculationItem::Deflection(input) => CalculationOutput::Deflection(deflection::calculate(input)?),
            CalculationItem::AutoBeam(input) => CalculationOutput::AutoBeam(autodesign::calculate(input)?),
            CalculationItem::BatchBeam(input) => CalculationOutput::BatchBeam(batch::calculate_beams(input)?),
            CalculationItem::WeldRecommend(input) => CalculationOutput::WeldRecommend(recommend::weld_size(input)?),
        };
        tracing::debug!(calculator = self.calc_type(), "calculation complete");
        Ok(output)
    }
}
