//! Sheet reader capability and its calamine-backed implementation.

use std::path::Path;

#[cfg(feature = "calamine")]
use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto};
#[cfg(feature = "calamine")]
use tracing::debug;

use crate::spec::{ReadError, SpecSheetTable};
#[cfg(feature = "calamine")]
use crate::conf::derive_default_sheet_read_options;
#[cfg(feature = "calamine")]
use crate::spec::{
    EnumCellValue, SpecSheetReadOptions, TypeRecord, format_datetime_text, format_time_text,
};
#[cfg(feature = "calamine")]
use crate::util::{convert_number_value, convert_text_value, normalize_headers};

/// Parses one spreadsheet file into headers and records.
///
/// Implementations must keep column and row order and fail the whole read on
/// any error.
pub trait SheetReader {
    /// Read the first worksheet of `path`.
    fn read(&self, path: &Path) -> Result<SpecSheetTable, ReadError>;
}

/// Return the reader compiled into this build.
#[cfg(feature = "calamine")]
pub fn derive_default_sheet_reader() -> Result<Box<dyn SheetReader>, ReadError> {
    Ok(Box::new(CalamineSheetReader::new(
        derive_default_sheet_read_options(),
    )))
}

/// Return the reader compiled into this build.
#[cfg(not(feature = "calamine"))]
pub fn derive_default_sheet_reader() -> Result<Box<dyn SheetReader>, ReadError> {
    Err(ReadError::BackendUnavailable)
}

/// Reader for xls/xlsx/xlsm/xlsb/ods workbooks.
#[cfg(feature = "calamine")]
#[derive(Debug, Clone, Default)]
pub struct CalamineSheetReader {
    options: SpecSheetReadOptions,
}

#[cfg(feature = "calamine")]
impl CalamineSheetReader {
    /// Create a reader with explicit options.
    pub fn new(options: SpecSheetReadOptions) -> Self {
        Self { options }
    }
}

#[cfg(feature = "calamine")]
impl SheetReader for CalamineSheetReader {
    fn read(&self, path: &Path) -> Result<SpecSheetTable, ReadError> {
        let mut workbook = open_workbook_auto(path).map_err(|e| ReadError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ReadError::NoWorksheet(path.to_path_buf()))?
            .map_err(|e| ReadError::Sheet {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let (n_height, n_width) = range.get_size();
        debug!(path = %path.display(), n_height, n_width, "worksheet loaded");

        Ok(derive_sheet_table(&range, &self.options))
    }
}

#[cfg(feature = "calamine")]
fn derive_sheet_table(range: &Range<Data>, options: &SpecSheetReadOptions) -> SpecSheetTable {
    let mut iter_rows = range.rows();
    let Some(row_header) = iter_rows.next() else {
        return SpecSheetTable::default();
    };

    let headers = normalize_headers(row_header.iter().map(derive_header_text).collect());

    let mut records = Vec::new();
    for row in iter_rows {
        if options.if_skip_blank_rows && row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let record: TypeRecord = headers
            .iter()
            .enumerate()
            .map(|(n_idx_col, c_name)| {
                let value = row
                    .get(n_idx_col)
                    .map_or(EnumCellValue::Absent, |cell| {
                        derive_cell_value(cell, options)
                    });
                (c_name.clone(), value)
            })
            .collect();
        records.push(record);
    }

    SpecSheetTable { headers, records }
}

#[cfg(feature = "calamine")]
fn derive_header_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) => Some(v.to_string()),
        Data::Bool(v) => Some(v.to_string()),
        Data::DateTime(v) => Some(match derive_datetime_value(v) {
            Some(EnumCellValue::DateTime(dt)) => format_datetime_text(&dt),
            Some(EnumCellValue::Time(t)) => format_time_text(&t),
            _ => v.as_f64().to_string(),
        }),
        Data::Error(_) | Data::Empty => None,
    }
}

#[cfg(feature = "calamine")]
fn derive_cell_value(cell: &Data, options: &SpecSheetReadOptions) -> EnumCellValue {
    match cell {
        Data::Empty | Data::Error(_) => EnumCellValue::Absent,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => convert_text_value(s),
        Data::Int(v) => EnumCellValue::Integer(*v),
        Data::Float(v) => convert_number_value(*v, options.integer_coerce),
        Data::Bool(v) => EnumCellValue::Boolean(*v),
        Data::DateTime(v) => derive_datetime_value(v)
            .unwrap_or_else(|| convert_number_value(v.as_f64(), options.integer_coerce)),
    }
}

/// Serials below one day carry no date part and read as a time of day.
#[cfg(feature = "calamine")]
fn derive_datetime_value(v: &ExcelDateTime) -> Option<EnumCellValue> {
    if !v.is_datetime() {
        return None;
    }
    let dt = v.as_datetime()?;
    if (0.0..1.0).contains(&v.as_f64()) {
        return Some(EnumCellValue::Time(dt.time()));
    }
    Some(EnumCellValue::DateTime(dt))
}
