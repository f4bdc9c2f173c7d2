//! Tabular beam import
//!
//! Runs beam checks from spreadsheet-style rows of text cells. The first row
//! is a header. Column order:
//!
//! | # | Column                   | Required |
//! |---|--------------------------|----------|
//! | 0 | material                 | yes      |
//! | 1 | span_m                   | yes      |
//! | 2 | udl_kn_m                 | yes      |
//! | 3 | width_m                  | yes      |
//! | 4 | height_m                 | no       |
//! | 5 | fy_mpa                   | no       |
//! | 6 | e_gpa                    | no       |
//! | 7 | deflection_limit_ratio   | no       |
//!
//! Unlike [`batch`](super::batch), a bad row never fails the import: rows
//! that are too short, have an unparsable required number, or fail the
//! calculation are skipped.

use serde::{Deserialize, Serialize};

use crate::calculations::beam::{self, BeamInput, BeamResult, DEFAULT_DEFLECTION_LIMIT_RATIO};
use crate::errors::{CalcError, CalcResult};
use crate::materials::BeamMaterial;

/// Minimum number of cells in a data row
pub const REQUIRED_COLUMNS: usize = 4;

/// Beam checks for every row that could be calculated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamImportResult {
    /// Number of successful rows
    pub count: usize,
    /// Results in row order
    pub results: Vec<BeamResult>,
}

/// Parse the longest leading decimal number of a cell, so `"6m"` reads as 6.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Trailing text such as a unit suffix is ignored.
pub fn leading_number(cell: &str) -> Option<f64> {
    let bytes = cell.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    cell[..end].parse().ok()
}

fn parse_required(row: &[String], index: usize, field: &str) -> CalcResult<f64> {
    let cell = row[index].trim();
    leading_number(cell).ok_or_else(|| CalcError::invalid_input(field, cell, "Not a number"))
}

/// Blank, missing, or unparsable optional cells read as unset.
fn parse_optional(row: &[String], index: usize) -> Option<f64> {
    leading_number(row.get(index)?.trim())
}

/// Parse one data row into a beam input.
///
/// Only the parse is checked here; value ranges are left to the beam
/// calculator.
///
/// # Example
///
/// ```rust
/// use calc_core::design::importer::parse_beam_row;
///
/// let row: Vec<String> = ["rc", "6", "25", "0.3", "0.6"].iter().map(|s| s.to_string()).collect();
/// let input = parse_beam_row(&row).unwrap();
/// assert_eq!(input.height_m, 0.6);
/// assert_eq!(input.deflection_limit_ratio, 250.0);
/// ```
pub fn parse_beam_row(row: &[String]) -> CalcResult<BeamInput> {
    if row.len() < REQUIRED_COLUMNS {
        return Err(CalcError::invalid_input(
            "row",
            row.len().to_string(),
            format!("Expected at least {REQUIRED_COLUMNS} columns"),
        ));
    }

    let material = BeamMaterial::from_tag(&row[0]);
    let span_m = parse_required(row, 1, "span_m")?;
    let udl_kn_m = parse_required(row, 2, "udl_kn_m")?;
    let width_m = parse_required(row, 3, "width_m")?;

    let ratio_cell_blank = row.get(7).map_or(true, |cell| cell.trim().is_empty());
    let deflection_limit_ratio = if ratio_cell_blank {
        DEFAULT_DEFLECTION_LIMIT_RATIO
    } else {
        parse_optional(row, 7).unwrap_or_default()
    };

    Ok(BeamInput {
        material,
        fy_mpa: parse_optional(row, 5).unwrap_or_default(),
        e_gpa: parse_optional(row, 6).unwrap_or_default(),
        span_m,
        udl_kn_m,
        width_m,
        height_m: parse_optional(row, 4).unwrap_or_default(),
        deflection_limit_ratio,
    })
}

/// Run a beam check for every data row, skipping rows that fail.
///
/// # Returns
///
/// * `Err(CalcError::EmptySheet)` - If there is no data row after the header
pub fn import_beam_rows(rows: &[Vec<String>]) -> CalcResult<BeamImportResult> {
    if rows.len() < 2 {
        return Err(CalcError::EmptySheet);
    }

    let mut results = Vec::with_capacity(rows.len() - 1);
    for (index, row) in rows.iter().enumerate().skip(1) {
        match parse_beam_row(row).and_then(|input| beam::calculate(&input)) {
            Ok(result) => results.push(result),
            Err(err) => tracing::debug!(row = index, error = %err, "skipping import row"),
        }
    }

    tracing::debug!(imported = results.len(), rows = rows.len() - 1, "beam import finished");
    Ok(BeamImportResult {
        count: results.len(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn header() -> Vec<String> {
        row(&["material", "span_m", "udl_kn_m", "width_m", "height_m", "fy_mpa", "e_gpa", "defl"])
    }

    #[test]
    fn test_skips_bad_rows() {
        let rows = vec![
            header(),
            row(&["steel", "6", "10", "0.1", "0.3"]),
            row(&["steel", "six", "10", "0.1"]),
            row(&["rc", "5", "20", "0.3", "0.5"]),
        ];
        let result = import_beam_rows(&rows).unwrap();
        assert_eq!(result.count, 2);
        assert!((result.results[0].max_moment_knm - 45.0).abs() < 1e-9);
        assert!((result.results[1].max_moment_knm - 62.5).abs() < 1e-9);
    }

    #[test]
    fn test_short_and_failing_rows_skipped() {
        let rows = vec![
            header(),
            row(&["steel", "6", "10"]),
            row(&["steel", "6", "0", "0.1"]),
            row(&["steel", "6", "10", "0.1"]),
        ];
        let result = import_beam_rows(&rows).unwrap();
        assert_eq!(result.count, 1);
    }

    #[test]
    fn test_header_only_is_empty_sheet() {
        let err = import_beam_rows(&[header()]).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_SHEET");
        assert_eq!(import_beam_rows(&[]).unwrap_err(), CalcError::EmptySheet);
    }

    #[test]
    fn test_all_rows_bad_is_not_an_error() {
        let rows = vec![header(), row(&["x"])];
        let result = import_beam_rows(&rows).unwrap();
        assert_eq!(result.count, 0);
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_optional_cells() {
        let input = parse_beam_row(&row(&["rc", "6", "25", "0.3", "", "abc", "32", "400"])).unwrap();
        assert_eq!(input.material, BeamMaterial::Rc);
        assert_eq!(input.height_m, 0.0);
        assert_eq!(input.fy_mpa, 0.0);
        assert_eq!(input.e_gpa, 32.0);
        assert_eq!(input.deflection_limit_ratio, 400.0);
    }

    #[test]
    fn test_ratio_defaults() {
        let absent = parse_beam_row(&row(&["steel", "6", "10", "0.1"])).unwrap();
        assert_eq!(absent.deflection_limit_ratio, DEFAULT_DEFLECTION_LIMIT_RATIO);

        let blank = parse_beam_row(&row(&["steel", "6", "10", "0.1", "", "", "", " "])).unwrap();
        assert_eq!(blank.deflection_limit_ratio, DEFAULT_DEFLECTION_LIMIT_RATIO);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let input = parse_beam_row(&row(&[" rc ", " 6 ", "10", "0.2 "])).unwrap();
        assert_eq!(input.material, BeamMaterial::Rc);
        assert_eq!(input.span_m, 6.0);
        assert_eq!(input.width_m, 0.2);
    }

    #[test]
    fn test_unit_suffix_is_ignored() {
        let input = parse_beam_row(&row(&["steel", "6m", "10kN/m", "0.1 m", "0.3m", "235MPa"])).unwrap();
        assert_eq!(input.span_m, 6.0);
        assert_eq!(input.udl_kn_m, 10.0);
        assert_eq!(input.width_m, 0.1);
        assert_eq!(input.height_m, 0.3);
        assert_eq!(input.fy_mpa, 235.0);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("6m"), Some(6.0));
        assert_eq!(leading_number("-2.5e3x"), Some(-2500.0));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("7."), Some(7.0));
        assert_eq!(leading_number("3e"), Some(3.0));
        assert_eq!(leading_number("1.5E+2kN"), Some(150.0));
        assert_eq!(leading_number("ten"), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_required_parse_error() {
        let err = parse_beam_row(&row(&["steel", "6", "ten", "0.1"])).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
