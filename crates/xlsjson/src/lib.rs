//! `xlsjson` v1:
//! Spreadsheet-to-JSON conversion pipeline.
//!
//! Modules:
//! - `conf`     : constants and key names
//! - `spec`     : path configuration, document models and errors
//! - `util`     : value sanitization
//! - `document` : document assembly and serialization
//! - `validate` : post-write verification
//! - `report`   : run reports
//! - `pipeline` : stage orchestration
//! - `cli`      : command-line boundary
pub mod cli;
pub mod conf;
pub mod document;
pub mod pipeline;
pub mod report;
pub mod spec;
pub mod util;
pub mod validate;

pub use document::{build_document, serialize_document};
pub use pipeline::{convert_file, convert_file_with_default_reader};
pub use report::{ReportConvert, ReportValidation};
pub use spec::{
    ConvertError, OutputValidationError, SpecConvertPaths, SpecDocument, SpecDocumentMetadata,
};
pub use util::{clean_records, clean_value};
pub use validate::validate_output_file;
pub use xlsjson_io_xlsx::{EnumCellValue, SheetReader, SpecSheetTable, TypeRecord};
