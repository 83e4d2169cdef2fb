use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::spec::{InputFileError, WriteFileError};

////////////////////////////////////////////////////////////////////////////////
// #region ExtensionMatching

/// Compile accepted extensions (`"xls"` or `".xls"`) into one case-insensitive
/// matcher over file names.
pub(crate) fn compile_extension_matcher(extensions: &[&str]) -> Result<GlobSet, InputFileError> {
    let mut builder_globset = GlobSetBuilder::new();
    for c_ext in extensions {
        let c_ext = c_ext.trim_start_matches('.');
        if c_ext.is_empty() {
            return Err(InputFileError::InvalidPattern(
                "Accepted extension must not be empty.".to_string(),
            ));
        }
        let glob = GlobBuilder::new(&format!("*.{c_ext}"))
            .case_insensitive(true)
            .literal_separator(true)
            .build()
            .map_err(|e| InputFileError::InvalidPattern(format!("{c_ext:?}: {e}")))?;
        builder_globset.add(glob);
    }
    builder_globset
        .build()
        .map_err(|e| InputFileError::InvalidPattern(e.to_string()))
}

/// Extension of `path` with its leading dot, or an empty string.
pub(crate) fn derive_extension_text(path: &Path) -> String {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|c_ext| format!(".{c_ext}"))
        .unwrap_or_default()
}

/// Render accepted extensions as `.xls, .xlsx`.
pub(crate) fn derive_accepted_text(extensions: &[&str]) -> String {
    extensions
        .iter()
        .map(|c_ext| format!(".{}", c_ext.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(", ")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteUtilities

/// Directory the output file lives in; `.` for bare file names.
pub(crate) fn derive_parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Classify an IO error raised while writing `path`.
pub(crate) fn derive_write_error(path: &Path, err: io::Error) -> WriteFileError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        WriteFileError::PermissionDenied {
            path: path.to_path_buf(),
            source: err,
        }
    } else {
        WriteFileError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
