//! Input file validation.

use std::path::Path;

use tracing::debug;

use crate::spec::InputFileError;
use crate::util::{compile_extension_matcher, derive_accepted_text, derive_extension_text};

/// Check that `file_in` is an existing regular file with an accepted extension.
///
/// Checks run in order and stop at the first failure:
/// 1. the path exists,
/// 2. the path is a regular file (symlinks are followed),
/// 3. the file name ends with one of `extensions`, compared case-insensitively.
///
/// `extensions` may be given with or without the leading dot.
pub fn validate_input_file<P>(file_in: P, extensions: &[&str]) -> Result<(), InputFileError>
where
    P: AsRef<Path>,
{
    let path_file_in = file_in.as_ref();

    if !path_file_in.exists() {
        return Err(InputFileError::NotFound(path_file_in.to_path_buf()));
    }
    if !path_file_in.is_file() {
        return Err(InputFileError::NotAFile(path_file_in.to_path_buf()));
    }

    let matcher_ext = compile_extension_matcher(extensions)?;
    let if_has_extension = path_file_in.extension().is_some();
    let if_is_accepted = path_file_in
        .file_name()
        .is_some_and(|name_file| matcher_ext.is_match(name_file));
    if !if_has_extension || !if_is_accepted {
        return Err(InputFileError::UnsupportedExtension {
            path: path_file_in.to_path_buf(),
            extension: derive_extension_text(path_file_in),
            accepted: derive_accepted_text(extensions),
        });
    }

    debug!(path = %path_file_in.display(), "input file accepted");
    Ok(())
}
