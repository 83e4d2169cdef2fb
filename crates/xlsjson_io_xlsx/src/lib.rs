//! `xlsjson_io_xlsx` v1:
//! Rust-side spreadsheet reader kernel.
//!
//! Modules:
//! - `conf`   : constants and default presets
//! - `spec`   : cell values, tables, options and errors
//! - `util`   : pure helper functions
//! - `reader` : `SheetReader` capability and the calamine backend
pub mod conf;
pub mod reader;
pub mod spec;
pub mod util;

pub use conf::{C_HEADER_UNNAMED_PREFIX, TUP_EXCEL_EXTENSIONS};
#[cfg(feature = "calamine")]
pub use reader::CalamineSheetReader;
pub use reader::{SheetReader, derive_default_sheet_reader};
pub use spec::{
    EnumCellValue, EnumIntegerCoerceMode, ReadError, SpecSheetReadOptions, SpecSheetTable,
    TypeRecord, format_datetime_text, format_time_text,
};
pub use util::{convert_number_value, convert_text_value, normalize_headers};
