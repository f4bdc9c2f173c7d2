//! # Design Orchestrators
//!
//! Higher-level operations built on top of the single-member calculators:
//!
//! - [`autodesign`] - Size a beam height from stress
//! - [`batch`] - Run many beam checks, all-or-nothing
//! - [`importer`] - Run beam checks from tabular rows, skipping bad rows
//! - [`recommend`] - Recommend a fillet weld size for a shear force

pub mod autodesign;
pub mod batch;
pub mod importer;
pub mod recommend;

pub use autodesign::{BeamAutoInput, BeamAutoResult};
pub use batch::{calculate_beams, BeamBatchInput, BeamBatchResult};
pub use importer::{import_beam_rows, parse_beam_row, BeamImportResult};
pub use recommend::{weld_size, WeldRecommendInput, WeldRecommendResult};
