//! Post-write structural verification of the output document.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::conf::{
    C_KEY_DATA, C_KEY_FIELD_COUNT, C_KEY_FIELDS, C_KEY_METADATA, C_KEY_TOTAL_RECORDS,
};
use crate::report::ReportValidation;
use crate::spec::OutputValidationError;

/// Re-read `file_out` and check it is the document that was meant to be written.
///
/// Steps stop at the first failure: file exists, contents read, JSON parses,
/// root is an object, `data` and `metadata` are present, `data` is an array
/// of `expected_records` entries, and the metadata counters (when present)
/// agree with `data` and `metadata.fields`.
pub fn validate_output_file<P>(
    file_out: P,
    expected_records: usize,
) -> Result<ReportValidation, OutputValidationError>
where
    P: AsRef<Path>,
{
    let path_file_out = file_out.as_ref();
    if !path_file_out.exists() {
        return Err(OutputValidationError::Missing(path_file_out.to_path_buf()));
    }

    let c_content =
        fs::read_to_string(path_file_out).map_err(|e| OutputValidationError::Read {
            path: path_file_out.to_path_buf(),
            source: e,
        })?;
    let value_root: Value =
        serde_json::from_str(&c_content).map_err(|e| OutputValidationError::Parse {
            path: path_file_out.to_path_buf(),
            source: e,
        })?;

    let Some(dict_root) = value_root.as_object() else {
        return Err(OutputValidationError::RootNotObject);
    };
    let value_data = dict_root
        .get(C_KEY_DATA)
        .ok_or(OutputValidationError::MissingKey(C_KEY_DATA))?;
    let value_metadata = dict_root
        .get(C_KEY_METADATA)
        .ok_or(OutputValidationError::MissingKey(C_KEY_METADATA))?;

    let l_data = value_data
        .as_array()
        .ok_or(OutputValidationError::DataNotArray)?;
    let n_records = l_data.len();
    if n_records != expected_records {
        return Err(OutputValidationError::RecordCountMismatch {
            expected: expected_records,
            actual: n_records,
        });
    }

    validate_metadata_counter(value_metadata, C_KEY_TOTAL_RECORDS, n_records)?;
    if let Some(l_fields) = value_metadata.get(C_KEY_FIELDS).and_then(Value::as_array) {
        validate_metadata_counter(value_metadata, C_KEY_FIELD_COUNT, l_fields.len())?;
    }

    let size_file_bytes = fs::metadata(path_file_out)
        .map_err(|e| OutputValidationError::Read {
            path: path_file_out.to_path_buf(),
            source: e,
        })?
        .len();
    let report = ReportValidation {
        size_file_bytes,
        cnt_records: n_records as u64,
        cnt_fields: value_metadata
            .get(C_KEY_FIELD_COUNT)
            .and_then(Value::as_u64),
    };
    info!("Validation passed: {report}");
    Ok(report)
}

fn validate_metadata_counter(
    value_metadata: &Value,
    key: &'static str,
    expected: usize,
) -> Result<(), OutputValidationError> {
    let Some(value_counter) = value_metadata.get(key) else {
        return Ok(());
    };
    if value_counter.as_u64() == Some(expected as u64) {
        return Ok(());
    }
    Err(OutputValidationError::MetadataMismatch {
        key,
        expected,
        actual: value_counter.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use serde_json::json;
    use tempfile::TempDir;
    use xlsjson_io_fs::write_text_file;
    use xlsjson_io_xlsx::{EnumCellValue, TypeRecord};

    use super::validate_output_file;
    use crate::document::{build_document, serialize_document};
    use crate::spec::OutputValidationError;
    use crate::util::clean_records;

    fn write_json(dir: &TempDir, value: &serde_json::Value) -> PathBuf {
        let path = dir.path().join("out.json");
        fs::write(&path, value.to_string()).expect("write json");
        path
    }

    #[test]
    fn validate_output_file_round_trip_succeeds() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("nested/out.json");

        let headers = vec!["id".to_string(), "标题".to_string()];
        let records: Vec<TypeRecord> = (0..3)
            .map(|n| {
                [
                    ("id".to_string(), EnumCellValue::Integer(n)),
                    ("标题".to_string(), EnumCellValue::Number(f64::NAN)),
                ]
                .into_iter()
                .collect()
            })
            .collect();
        let n_records = records.len();

        let txt = serialize_document(&build_document(headers, clean_records(records)))
            .expect("serialize");
        let n_bytes = write_text_file(&path, &txt).expect("write");

        let report = validate_output_file(&path, n_records).expect("valid");
        assert_eq!(report.cnt_records, 3);
        assert_eq!(report.cnt_fields, Some(2));
        assert_eq!(report.size_file_bytes, n_bytes);
    }

    #[test]
    fn validate_output_file_missing() {
        let tmp = TempDir::new().expect("tempdir");
        assert!(matches!(
            validate_output_file(tmp.path().join("absent.json"), 0),
            Err(OutputValidationError::Missing(_))
        ));
    }

    #[test]
    fn validate_output_file_unreadable_path_reports_read_error() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("out.json");
        fs::create_dir(&path).expect("dir in place of file");
        match validate_output_file(&path, 0) {
            Err(OutputValidationError::Read { path: path_err, .. }) => {
                assert_eq!(path_err, path);
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn validate_output_file_malformed_json() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("out.json");
        fs::write(&path, "{\"data\": [").expect("write");
        assert!(matches!(
            validate_output_file(&path, 0),
            Err(OutputValidationError::Parse { .. })
        ));
    }

    #[test]
    fn validate_output_file_structural_failures() {
        let tmp = TempDir::new().expect("tempdir");

        let path = write_json(&tmp, &json!([1, 2]));
        assert!(matches!(
            validate_output_file(&path, 2),
            Err(OutputValidationError::RootNotObject)
        ));

        let path = write_json(&tmp, &json!({"metadata": {}}));
        assert!(matches!(
            validate_output_file(&path, 0),
            Err(OutputValidationError::MissingKey("data"))
        ));

        let path = write_json(&tmp, &json!({"data": []}));
        assert!(matches!(
            validate_output_file(&path, 0),
            Err(OutputValidationError::MissingKey("metadata"))
        ));

        let path = write_json(&tmp, &json!({"data": {}, "metadata": {}}));
        assert!(matches!(
            validate_output_file(&path, 0),
            Err(OutputValidationError::DataNotArray)
        ));
    }

    #[test]
    fn validate_output_file_record_count_mismatch() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_json(&tmp, &json!({"data": [{}, {}], "metadata": {}}));
        match validate_output_file(&path, 3) {
            Err(OutputValidationError::RecordCountMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (3, 2));
            }
            other => panic!("expected count mismatch, got {other:?}"),
        }
    }

    #[test]
    fn validate_output_file_metadata_mismatch() {
        let tmp = TempDir::new().expect("tempdir");

        let path = write_json(
            &tmp,
            &json!({"data": [{}], "metadata": {"total_records": 2}}),
        );
        assert!(matches!(
            validate_output_file(&path, 1),
            Err(OutputValidationError::MetadataMismatch { key: "total_records", .. })
        ));

        let path = write_json(
            &tmp,
            &json!({"data": [], "metadata": {"fields": ["a"], "field_count": "1"}}),
        );
        assert!(matches!(
            validate_output_file(&path, 0),
            Err(OutputValidationError::MetadataMismatch { key: "field_count", .. })
        ));
    }

    #[test]
    fn validate_output_file_without_field_count_reports_none() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_json(&tmp, &json!({"data": [], "metadata": {}}));
        let report = validate_output_file(&path, 0).expect("valid");
        assert_eq!(report.cnt_fields, None);
        assert_eq!(report.to_string().rsplit(' ').next(), Some("fields=N/A"));
    }
}
