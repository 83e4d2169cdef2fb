//! Text file writer with parent creation and atomic replace.

use std::fs;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tempfile::Builder as TempFileBuilder;
use tracing::debug;

use crate::spec::WriteFileError;
use crate::util::{derive_parent_dir, derive_write_error};

const C_PREFIX_TEMP_FILE: &str = ".xlsjson-";
const C_SUFFIX_TEMP_FILE: &str = ".tmp";
#[cfg(unix)]
const N_MODE_FILE_NEW: u32 = 0o666;

/// Write `text` as UTF-8 to `file_out` and return the number of bytes written.
///
/// Missing ancestor directories are created first. Bytes go to a temporary
/// sibling which is synced and then renamed over `file_out`, so readers never
/// observe a partially written target. A replaced target keeps its
/// permissions; a new one gets the process umask default.
pub fn write_text_file<P>(file_out: P, text: &str) -> Result<u64, WriteFileError>
where
    P: AsRef<Path>,
{
    let path_file_out = file_out.as_ref();
    let path_dir_parent = derive_parent_dir(path_file_out);

    fs::create_dir_all(&path_dir_parent).map_err(|e| derive_write_error(path_file_out, e))?;

    let mut builder = TempFileBuilder::new();
    builder.prefix(C_PREFIX_TEMP_FILE).suffix(C_SUFFIX_TEMP_FILE);
    // Creation mode is masked by umask, like a plain `File::create`.
    #[cfg(unix)]
    builder.permissions(fs::Permissions::from_mode(N_MODE_FILE_NEW));
    let mut file_tmp = builder
        .tempfile_in(&path_dir_parent)
        .map_err(|e| derive_write_error(path_file_out, e))?;

    file_tmp
        .write_all(text.as_bytes())
        .and_then(|()| file_tmp.as_file().sync_all())
        .map_err(|e| derive_write_error(path_file_out, e))?;

    if let Ok(meta) = fs::metadata(path_file_out) {
        file_tmp
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| derive_write_error(path_file_out, e))?;
    }

    // Dropping the temp handle on error removes the sibling.
    file_tmp
        .persist(path_file_out)
        .map_err(|e| derive_write_error(path_file_out, e.error))?;

    let n_bytes = text.len() as u64;
    debug!(path = %path_file_out.display(), n_bytes, "text file written");
    Ok(n_bytes)
}
