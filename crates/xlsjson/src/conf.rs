//! Converter constants.

/// Directory under the project root holding input and output files.
pub const C_DIR_PUBLIC: &str = "public";
/// Default spreadsheet converted when no input is given.
pub const C_NAME_FILE_IN_DEFAULT: &str = "BUG统计数据.xls";
/// Extension of the output document.
pub const C_EXT_JSON: &str = "json";
/// Indent unit of the serialized document.
pub const C_JSON_INDENT: &[u8] = b"  ";

/// Top-level key of the record array.
pub const C_KEY_DATA: &str = "data";
/// Top-level key of the summary block.
pub const C_KEY_METADATA: &str = "metadata";
/// Metadata key holding the record count.
pub const C_KEY_TOTAL_RECORDS: &str = "total_records";
/// Metadata key holding the field list.
pub const C_KEY_FIELDS: &str = "fields";
/// Metadata key holding the field count.
pub const C_KEY_FIELD_COUNT: &str = "field_count";
