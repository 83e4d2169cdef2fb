//! Spreadsheet reader constants and default presets.

use crate::spec::SpecSheetReadOptions;

/// Spreadsheet file extensions accepted as converter input.
pub const TUP_EXCEL_EXTENSIONS: [&str; 3] = ["xls", "xlsx", "xlsm"];
/// Prefix for generated names of blank header cells (`Unnamed: 3`).
pub const C_HEADER_UNNAMED_PREFIX: &str = "Unnamed: ";
/// Separator between a duplicated header name and its occurrence index (`id.1`).
pub const C_HEADER_DUPLICATE_SEP: &str = ".";
/// Largest integer magnitude an `f64` represents exactly (2^53).
pub const N_F64_SAFE_INTEGER_MAX: f64 = 9_007_199_254_740_992.0;

/// Build default read options.
pub fn derive_default_sheet_read_options() -> SpecSheetReadOptions {
    SpecSheetReadOptions::default()
}
