//! Stateless helpers shared by sheet readers.

use std::collections::BTreeSet;

use crate::conf::{C_HEADER_DUPLICATE_SEP, C_HEADER_UNNAMED_PREFIX, N_F64_SAFE_INTEGER_MAX};
use crate::spec::{EnumCellValue, EnumIntegerCoerceMode};

////////////////////////////////////////////////////////////////////////////////
// #region HeaderNormalization

/// Turn raw header cells into unique field names.
///
/// Blank cells (`None` or empty text) are named `Unnamed: <col_idx>`.
/// Repeated names get `.1`, `.2`, ... suffixes; the first occurrence keeps
/// the bare name.
pub fn normalize_headers(raw_headers: Vec<Option<String>>) -> Vec<String> {
    let mut set_names_seen = BTreeSet::new();
    let mut l_headers = Vec::with_capacity(raw_headers.len());

    for (n_idx_col, c_raw) in raw_headers.into_iter().enumerate() {
        let c_name_base = match c_raw {
            Some(c_name) if !c_name.is_empty() => c_name,
            _ => format!("{C_HEADER_UNNAMED_PREFIX}{n_idx_col}"),
        };

        let mut c_name = c_name_base.clone();
        let mut n_dup = 0;
        while set_names_seen.contains(&c_name) {
            n_dup += 1;
            c_name = format!("{c_name_base}{C_HEADER_DUPLICATE_SEP}{n_dup}");
        }
        set_names_seen.insert(c_name.clone());
        l_headers.push(c_name);
    }

    l_headers
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellValueConversion

/// Convert a floating-point cell according to the integer coerce mode.
///
/// Non-finite values pass through unchanged.
pub fn convert_number_value(x: f64, integer_coerce: EnumIntegerCoerceMode) -> EnumCellValue {
    if integer_coerce == EnumIntegerCoerceMode::Coerce
        && x.is_finite()
        && x.fract() == 0.0
        && x.abs() <= N_F64_SAFE_INTEGER_MAX
    {
        return EnumCellValue::Integer(x as i64);
    }
    EnumCellValue::Number(x)
}

/// Convert a text cell; empty text is the absent marker.
pub fn convert_text_value(s: &str) -> EnumCellValue {
    if s.is_empty() {
        EnumCellValue::Absent
    } else {
        EnumCellValue::Text(s.to_string())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
