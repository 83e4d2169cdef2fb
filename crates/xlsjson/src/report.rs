//! Run reports for validation and conversion.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Summary of a successful output validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportValidation {
    /// Size of the output file on disk.
    pub size_file_bytes: u64,
    /// Records found in `data`.
    pub cnt_records: u64,
    /// `metadata.field_count`, when present and numeric.
    pub cnt_fields: Option<u64>,
}

impl ReportValidation {
    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let c_fields = self
            .cnt_fields
            .map_or_else(|| "N/A".to_string(), |n| n.to_string());
        format!(
            "{prefix} size_bytes={} records={} fields={c_fields}",
            self.size_file_bytes, self.cnt_records
        )
    }
}

impl fmt::Display for ReportValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[VALIDATE]"))
    }
}

/// Outcome of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConvert {
    /// Spreadsheet that was read.
    pub path_file_in: PathBuf,
    /// Document that was written.
    pub path_file_out: PathBuf,
    /// Records read and written.
    pub cnt_records: u64,
    /// Fields in the header row.
    pub cnt_fields: u64,
    /// Bytes written to `path_file_out`.
    pub cnt_bytes_written: u64,
    /// Post-write validation summary.
    pub validation: ReportValidation,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl ReportConvert {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_records".to_string(), self.cnt_records);
        dict_counts.insert("cnt_fields".to_string(), self.cnt_fields);
        dict_counts.insert("cnt_bytes_written".to_string(), self.cnt_bytes_written);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} records={} fields={} bytes={} warnings={} out={}",
            dict_counts["cnt_records"],
            dict_counts["cnt_fields"],
            dict_counts["cnt_bytes_written"],
            dict_counts["cnt_warnings"],
            self.path_file_out.display()
        )
    }
}

impl fmt::Display for ReportConvert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[CONVERT]"))
    }
}
