//! Batch beam checks
//!
//! Items run sequentially in input order. The first failing item aborts the
//! whole batch and its error is returned unchanged; no partial results are
//! reported.

use serde::{Deserialize, Serialize};

use crate::calculations::beam::{self, BeamInput, BeamResult};
use crate::errors::{CalcError, CalcResult};

/// A list of beam checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamBatchInput {
    pub items: Vec<BeamInput>,
}

/// Results in the same order as the input items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamBatchResult {
    pub results: Vec<BeamResult>,
}

/// Run every beam check, failing on the first invalid item.
///
/// # Returns
///
/// * `Err(CalcError::EmptyBatch)` - If `items` is empty
/// * `Err(_)` - The first item error, verbatim
pub fn calculate_beams(input: &BeamBatchInput) -> CalcResult<BeamBatchResult> {
    if input.items.is_empty() {
        return Err(CalcError::EmptyBatch);
    }

    let results = input
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            beam::calculate(item).inspect_err(|err| {
                tracing::debug!(index, error = %err, "batch aborted");
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(BeamBatchResult { results })
}
