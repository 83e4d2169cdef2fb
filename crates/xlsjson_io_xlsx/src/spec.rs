//! Shared spreadsheet models, options and errors.

use std::path::PathBuf;

use chrono::{NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use serde::ser::{Error as _, Serialize, Serializer};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region CellValue

/// Normalized cell value handed from the reader to the conversion pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value. Serialized as `null`.
    Absent,
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Floating-point value. May be non-finite until sanitized.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
    /// Date/time value.
    DateTime(NaiveDateTime),
    /// Time-of-day value without a date part.
    Time(NaiveTime),
}

impl EnumCellValue {
    /// Whether this is the absent marker.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether this is a NaN or infinite floating-point value.
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::Number(x) if !x.is_finite())
    }
}

/// Canonical text of a date/time cell: `YYYY-MM-DD HH:MM:SS[.fraction]`.
pub fn format_datetime_text(value: &NaiveDateTime) -> String {
    value.to_string()
}

/// Canonical text of a time cell: `HH:MM:SS[.fraction]`.
pub fn format_time_text(value: &NaiveTime) -> String {
    value.to_string()
}

impl Serialize for EnumCellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Integer(v) => serializer.serialize_i64(*v),
            Self::Number(v) if v.is_finite() => serializer.serialize_f64(*v),
            Self::Number(v) => Err(S::Error::custom(format!(
                "non-finite number {v} has no JSON representation"
            ))),
            Self::Boolean(v) => serializer.serialize_bool(*v),
            Self::DateTime(v) => serializer.serialize_str(&format_datetime_text(v)),
            Self::Time(v) => serializer.serialize_str(&format_time_text(v)),
        }
    }
}

/// One data row: field name -> value, keys in header order.
pub type TypeRecord = IndexMap<String, EnumCellValue>;

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetTable

/// Header list and records parsed from one worksheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecSheetTable {
    /// Field names from the header row, in column order.
    pub headers: Vec<String>,
    /// Data rows, in sheet order.
    pub records: Vec<TypeRecord>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReadOptions

/// Conversion policy for floating-point cells holding integral values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumIntegerCoerceMode {
    /// Emit integral floats (`3.0`) as integers (`3`).
    #[default]
    Coerce,
    /// Keep every floating-point cell as a number with fraction.
    Strict,
}

/// Reader options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetReadOptions {
    /// Integral float handling.
    pub integer_coerce: EnumIntegerCoerceMode,
    /// Drop data rows whose cells are all empty.
    pub if_skip_blank_rows: bool,
}

impl Default for SpecSheetReadOptions {
    fn default() -> Self {
        Self {
            integer_coerce: EnumIntegerCoerceMode::Coerce,
            if_skip_blank_rows: true,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Spreadsheet read failure. No partial table accompanies it.
#[derive(Debug, Error)]
pub enum ReadError {
    /// No spreadsheet parsing backend was compiled in.
    #[error("Spreadsheet backend unavailable: build with the `calamine` feature")]
    BackendUnavailable,
    /// Workbook could not be opened or its container is malformed.
    #[error("Failed to open workbook {}: {message}", path.display())]
    Open {
        /// Workbook path.
        path: PathBuf,
        /// Backend error text.
        message: String,
    },
    /// Workbook has no worksheet.
    #[error("Workbook has no worksheet: {}", .0.display())]
    NoWorksheet(PathBuf),
    /// First worksheet could not be parsed.
    #[error("Failed to read first worksheet of {}: {message}", path.display())]
    Sheet {
        /// Workbook path.
        path: PathBuf,
        /// Backend error text.
        message: String,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
