//! Converter models, path configuration and errors.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use xlsjson_io_fs::{InputFileError, WriteFileError};
use xlsjson_io_xlsx::{ReadError, TypeRecord};

use crate::conf::{C_DIR_PUBLIC, C_EXT_JSON, C_NAME_FILE_IN_DEFAULT};

////////////////////////////////////////////////////////////////////////////////
// #region PathConfiguration

/// Input and output paths of one conversion run.
///
/// Resolved once at the CLI boundary and passed into the pipeline as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecConvertPaths {
    /// Spreadsheet to read.
    pub path_file_in: PathBuf,
    /// JSON document to write.
    pub path_file_out: PathBuf,
}

impl SpecConvertPaths {
    /// Default layout under a project root: `<root>/public/BUG统计数据.xls`
    /// converted to `<root>/public/BUG统计数据.json`.
    pub fn from_root<P: AsRef<Path>>(dir_root: P) -> Self {
        Self::from_input(
            dir_root
                .as_ref()
                .join(C_DIR_PUBLIC)
                .join(C_NAME_FILE_IN_DEFAULT),
        )
    }

    /// Write the document next to the input, with a `.json` extension.
    pub fn from_input<P: AsRef<Path>>(file_in: P) -> Self {
        let path_file_in = file_in.as_ref().to_path_buf();
        let path_file_out = path_file_in.with_extension(C_EXT_JSON);
        Self {
            path_file_in,
            path_file_out,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Document

/// Summary block of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecDocumentMetadata {
    /// Number of records in `data`.
    pub total_records: usize,
    /// Field names in column order.
    pub fields: Vec<String>,
    /// Number of entries in `fields`.
    pub field_count: usize,
}

/// Output document. Field order here is the key order on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecDocument {
    /// Summary block.
    pub metadata: SpecDocumentMetadata,
    /// Sanitized records.
    pub data: Vec<TypeRecord>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Post-write structural check failure.
#[derive(Debug, Error)]
pub enum OutputValidationError {
    /// Output file is missing.
    #[error("Output file does not exist: {}", .0.display())]
    Missing(PathBuf),
    /// Output file could not be read as UTF-8 text.
    #[error("Failed to read output file {}: {source}", path.display())]
    Read {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Output file is not valid JSON.
    #[error("Output file is not valid JSON {}: {source}", path.display())]
    Parse {
        /// Output path.
        path: PathBuf,
        /// Parser error.
        source: serde_json::Error,
    },
    /// JSON root is not an object.
    #[error("JSON root element is not an object")]
    RootNotObject,
    /// A required top-level key is missing.
    #[error("Missing required top-level key {0:?}")]
    MissingKey(&'static str),
    /// `data` is not an array.
    #[error("Top-level \"data\" is not an array")]
    DataNotArray,
    /// Record count differs from the number of records read.
    #[error("Record count mismatch (expected: {expected}, actual: {actual})")]
    RecordCountMismatch {
        /// Records read from the spreadsheet.
        expected: usize,
        /// Records found in the output.
        actual: usize,
    },
    /// A metadata counter disagrees with the content it summarizes.
    #[error("Metadata {key:?} mismatch (expected: {expected}, actual: {actual})")]
    MetadataMismatch {
        /// Metadata key.
        key: &'static str,
        /// Value derived from the content.
        expected: usize,
        /// Value found in the metadata block.
        actual: String,
    },
}

/// Conversion pipeline failure, one variant per stage.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input validation rejected the input path.
    #[error("Input validation failed: {0}")]
    Input(#[from] InputFileError),
    /// Spreadsheet reading failed.
    #[error("Spreadsheet read failed: {0}")]
    Read(#[from] ReadError),
    /// A value could not be rendered as JSON.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Output file could not be written.
    #[error("JSON write failed: {0}")]
    Write(#[from] WriteFileError),
    /// Written file failed the structural checks.
    #[error("Output validation failed: {0}")]
    Validation(#[from] OutputValidationError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
