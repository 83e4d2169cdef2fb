//! Spreadsheet-to-JSON conversion orchestration.

use tracing::{info, warn};
use xlsjson_io_fs::{validate_input_file, write_text_file};
use xlsjson_io_xlsx::{SheetReader, TUP_EXCEL_EXTENSIONS, derive_default_sheet_reader};

use crate::document::{build_document, serialize_document};
use crate::report::ReportConvert;
use crate::spec::{ConvertError, SpecConvertPaths};
use crate::util::clean_records;
use crate::validate::validate_output_file;

/// Convert `paths.path_file_in` into a JSON document at `paths.path_file_out`.
///
/// Stages run in order and the first failure aborts the run:
/// 1. input validation,
/// 2. sheet reading through `reader`,
/// 3. value sanitization,
/// 4. document assembly,
/// 5. serialization,
/// 6. file write,
/// 7. post-write validation.
///
/// An input without data rows is not an error: a warning is recorded and a
/// document with an empty `data` array is written.
pub fn convert_file(
    paths: &SpecConvertPaths,
    reader: &dyn SheetReader,
) -> Result<ReportConvert, ConvertError> {
    let path_file_in = &paths.path_file_in;
    let path_file_out = &paths.path_file_out;
    info!("Input file: {}", path_file_in.display());
    info!("Output file: {}", path_file_out.display());

    validate_input_file(path_file_in, &TUP_EXCEL_EXTENSIONS)?;

    info!("Reading spreadsheet: {}", path_file_in.display());
    let table = reader.read(path_file_in)?;
    info!(
        "Found {} fields: {}",
        table.headers.len(),
        table.headers.join(", ")
    );
    info!("Read {} data records", table.records.len());

    let mut l_warnings = Vec::new();
    if table.records.is_empty() {
        let c_warning = format!("No data records in {}", path_file_in.display());
        warn!("{c_warning}");
        l_warnings.push(c_warning);
    }

    info!("Converting to JSON");
    let n_records = table.records.len();
    let n_fields = table.headers.len();
    let document = build_document(table.headers, clean_records(table.records));
    let c_json = serialize_document(&document)?;

    let n_bytes = write_text_file(path_file_out, &c_json)?;
    info!("JSON file saved: {}", path_file_out.display());

    info!("Validating written JSON file");
    let report_validation = validate_output_file(path_file_out, n_records)?;

    let report = ReportConvert {
        path_file_in: path_file_in.clone(),
        path_file_out: path_file_out.clone(),
        cnt_records: n_records as u64,
        cnt_fields: n_fields as u64,
        cnt_bytes_written: n_bytes,
        validation: report_validation,
        warnings: l_warnings,
    };
    info!("Conversion complete: {report}");
    Ok(report)
}

/// [`convert_file`] with the reader compiled into this build.
pub fn convert_file_with_default_reader(
    paths: &SpecConvertPaths,
) -> Result<ReportConvert, ConvertError> {
    let reader = derive_default_sheet_reader()?;
    convert_file(paths, reader.as_ref())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use xlsjson_io_fs::InputFileError;
    use xlsjson_io_xlsx::{EnumCellValue, ReadError, SheetReader, SpecSheetTable, TypeRecord};

    use super::convert_file;
    use crate::spec::{ConvertError, SpecConvertPaths};

    /// In-memory reader returning a fixed table and counting calls.
    struct FakeSheetReader {
        table: SpecSheetTable,
        cnt_calls: Cell<usize>,
    }

    impl FakeSheetReader {
        fn new(headers: &[&str], records: Vec<TypeRecord>) -> Self {
            Self {
                table: SpecSheetTable {
                    headers: headers.iter().map(ToString::to_string).collect(),
                    records,
                },
                cnt_calls: Cell::new(0),
            }
        }
    }

    impl SheetReader for FakeSheetReader {
        fn read(&self, _path: &Path) -> Result<SpecSheetTable, ReadError> {
            self.cnt_calls.set(self.cnt_calls.get() + 1);
            Ok(self.table.clone())
        }
    }

    struct FailingSheetReader;

    impl SheetReader for FailingSheetReader {
        fn read(&self, path: &Path) -> Result<SpecSheetTable, ReadError> {
            Err(ReadError::Sheet {
                path: path.to_path_buf(),
                message: "corrupt BIFF record".to_string(),
            })
        }
    }

    fn derive_record(l_pairs: Vec<(&str, EnumCellValue)>) -> TypeRecord {
        l_pairs
            .into_iter()
            .map(|(c_key, value)| (c_key.to_string(), value))
            .collect()
    }

    fn derive_paths(dir: &TempDir, name_file_in: &str) -> SpecConvertPaths {
        let path_dir_public = dir.path().join("public");
        fs::create_dir_all(&path_dir_public).expect("mkdir");
        let path_file_in = path_dir_public.join(name_file_in);
        fs::write(&path_file_in, b"placeholder").expect("touch input");
        SpecConvertPaths::from_input(path_file_in)
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("parse")
    }

    #[test]
    fn convert_file_writes_sanitized_document() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = derive_paths(&tmp, "BUG统计数据.xls");
        let reader = FakeSheetReader::new(
            &["id", "title", "priority"],
            vec![derive_record(vec![
                ("id", EnumCellValue::Integer(1)),
                ("title", EnumCellValue::Text("登录失败".to_string())),
                ("priority", EnumCellValue::Number(f64::NAN)),
            ])],
        );

        let report = convert_file(&paths, &reader).expect("convert");
        assert_eq!(report.cnt_records, 1);
        assert_eq!(report.cnt_fields, 3);
        assert_eq!(report.warning_count(), 0);
        assert_eq!(report.validation.cnt_fields, Some(3));
        assert_eq!(
            paths.path_file_out.file_name().and_then(|s| s.to_str()),
            Some("BUG统计数据.json")
        );

        let value = read_json(&paths.path_file_out);
        assert_eq!(
            value["data"][0],
            json!({"id": 1, "title": "登录失败", "priority": null})
        );
        assert_eq!(value["metadata"]["total_records"], json!(1));
        assert_eq!(value["metadata"]["field_count"], json!(3));
        assert!(
            fs::read_to_string(&paths.path_file_out)
                .expect("read")
                .contains("登录失败")
        );
    }

    #[test]
    fn convert_file_is_idempotent() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = derive_paths(&tmp, "bugs.xlsx");
        let reader = FakeSheetReader::new(
            &["id", "status"],
            (0..5)
                .map(|n| {
                    derive_record(vec![
                        ("id", EnumCellValue::Integer(n)),
                        ("status", EnumCellValue::Text("open".to_string())),
                    ])
                })
                .collect(),
        );

        convert_file(&paths, &reader).expect("first run");
        let value_first = read_json(&paths.path_file_out);
        convert_file(&paths, &reader).expect("second run");
        let value_second = read_json(&paths.path_file_out);

        assert_eq!(value_first["metadata"], value_second["metadata"]);
        assert_eq!(value_first, value_second);
        assert_eq!(reader.cnt_calls.get(), 2);
    }

    #[test]
    fn convert_file_with_no_records_warns_and_writes_empty_data() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = derive_paths(&tmp, "empty.xls");
        let reader = FakeSheetReader::new(&["id", "title"], vec![]);

        let report = convert_file(&paths, &reader).expect("convert");
        assert_eq!(report.warning_count(), 1);

        let value = read_json(&paths.path_file_out);
        assert_eq!(value["data"], json!([]));
        assert_eq!(value["metadata"]["fields"], json!(["id", "title"]));
        assert_eq!(value["metadata"]["field_count"], json!(2));
    }

    #[test]
    fn convert_file_missing_input_writes_nothing() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = SpecConvertPaths::from_root(tmp.path());
        let reader = FakeSheetReader::new(&["id"], vec![]);

        let err = convert_file(&paths, &reader).expect_err("must fail");
        assert!(matches!(err, ConvertError::Input(InputFileError::NotFound(_))));
        assert_eq!(reader.cnt_calls.get(), 0);
        assert!(!paths.path_file_out.exists());
    }

    #[test]
    fn convert_file_rejects_unsupported_extension_before_reading() {
        let tmp = TempDir::new().expect("tempdir");
        for name in ["bugs.csv", "bugs.txt", "bugs"] {
            let paths = derive_paths(&tmp, name);
            let paths = SpecConvertPaths {
                path_file_out: tmp.path().join(format!("{name}.out.json")),
                ..paths
            };
            let reader = FakeSheetReader::new(&["id"], vec![]);

            let err = convert_file(&paths, &reader).expect_err("must fail");
            assert!(matches!(
                err,
                ConvertError::Input(InputFileError::UnsupportedExtension { .. })
            ));
            assert_eq!(reader.cnt_calls.get(), 0);
            assert!(!paths.path_file_out.exists());
        }
    }

    #[test]
    fn convert_file_read_failure_keeps_existing_output() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = derive_paths(&tmp, "bugs.xls");
        fs::write(&paths.path_file_out, "previous").expect("seed output");

        let err = convert_file(&paths, &FailingSheetReader).expect_err("must fail");
        assert!(matches!(err, ConvertError::Read(ReadError::Sheet { .. })));
        assert!(err.to_string().contains("corrupt BIFF record"));
        assert_eq!(
            fs::read_to_string(&paths.path_file_out).expect("read"),
            "previous"
        );
    }

    #[test]
    fn convert_file_write_failure_is_reported() {
        let tmp = TempDir::new().expect("tempdir");
        let paths = derive_paths(&tmp, "bugs.xls");
        let path_blocker = tmp.path().join("blocker");
        fs::write(&path_blocker, "x").expect("seed");
        let paths = SpecConvertPaths {
            path_file_out: path_blocker.join("out.json"),
            ..paths
        };
        let reader = FakeSheetReader::new(&["id"], vec![]);

        let err = convert_file(&paths, &reader).expect_err("must fail");
        assert!(matches!(err, ConvertError::Write(_)));
    }
}
