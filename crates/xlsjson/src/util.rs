//! Value sanitization applied between reading and serialization.

use xlsjson_io_xlsx::{EnumCellValue, TypeRecord, format_datetime_text, format_time_text};

/// Sanitize one value.
///
/// NaN and infinite numbers become [`EnumCellValue::Absent`]; date/time and
/// time values become their canonical text. Everything else is returned as is.
pub fn clean_value(value: EnumCellValue) -> EnumCellValue {
    if value.is_non_finite() {
        return EnumCellValue::Absent;
    }
    match value {
        EnumCellValue::DateTime(dt) => EnumCellValue::Text(format_datetime_text(&dt)),
        EnumCellValue::Time(t) => EnumCellValue::Text(format_time_text(&t)),
        other => other,
    }
}

/// Sanitize every value of every record, keeping record and key order.
pub fn clean_records(records: Vec<TypeRecord>) -> Vec<TypeRecord> {
    records
        .into_iter()
        .map(|record| {
            record
                .into_iter()
                .map(|(c_key, value)| (c_key, clean_value(value)))
                .collect()
        })
        .collect()
}
