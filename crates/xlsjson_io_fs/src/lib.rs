//! `xlsjson_io_fs` v1:
//! Rust-side filesystem kernel for spreadsheet-to-JSON conversion.
//!
//! Modules:
//! - `input`  : input file validation
//! - `writer` : output text writer
//! - `spec`   : error types
//! - `util`   : shared helper functions

pub mod input;
pub mod spec;
mod util;
pub mod writer;

pub use input::validate_input_file;
pub use spec::{InputFileError, WriteFileError};
pub use writer::write_text_file;
