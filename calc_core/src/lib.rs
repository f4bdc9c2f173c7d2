//! # calc_core - Structural Design Calculation Engine
//!
//! `calc_core` is the computational heart of Vertex. It turns flat numeric
//! input records into structural check results: design load combinations, RC
//! flexure, beam and column checks, pile capacity, welds, anchors, and
//! deflection. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Lenient Inputs**: Missing fields read as 0, which means "use the default"
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::CalculationItem;
//!
//! let request = r#"{
//!     "calculator": "column",
//!     "input": { "length_m": 3.0, "width_m": 0.2, "height_m": 0.2, "load_kn": 500 }
//! }"#;
//!
//! let item: CalculationItem = serde_json::from_str(request).unwrap();
//! let result = item.calculate().unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("pcr_kn"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Single-member calculators and request dispatch
//! - [`design`] - Auto-sizing, batch, tabular import, and recommendations
//! - [`loads`] - Design methods, load factors, and load combination
//! - [`materials`] - Beam material selection and defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//!
//! ## Logging
//!
//! The engine emits `tracing` events at debug level (skipped import rows,
//! batch aborts, unrecognized method tags) and never installs a subscriber.

pub mod calculations;
pub mod design;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use loads::DesignMethod;
