//! Target directory validation.
//!
//! Writability is asked of the OS for the running process (`access(2)` on
//! Unix), so ownership and the effective uid are taken into account. Nothing
//! is written. The answer can still go stale before the post is created, in
//! which case the failure surfaces as an IO error on create.

use crate::error::{DirectoryProblem, NewpostError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Checks that `path` is an existing, writable directory and returns it.
pub fn validate_directory(path: &Path) -> Result<PathBuf> {
    let invalid = |reason| NewpostError::InvalidDirectory {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => metadata,
        _ => return Err(invalid(DirectoryProblem::NotADirectory)),
    };

    if !is_writable(path, &metadata) {
        return Err(invalid(DirectoryProblem::NotWritable));
    }

    debug!(path = %path.display(), "target directory validated");
    Ok(path.to_path_buf())
}

#[cfg(unix)]
fn is_writable(path: &Path, _metadata: &fs::Metadata) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn is_writable(_path: &Path, metadata: &fs::Metadata) -> bool {
    !metadata.permissions().readonly()
}

/// Resolves the optional directory argument, falling back to `cwd`.
///
/// `cwd` is `None` when the working directory could not be read (e.g. it was
/// deleted); that only matters when no directory argument was given.
pub fn resolve_directory(arg: Option<&Path>, cwd: Option<&Path>) -> Result<PathBuf> {
    match (arg, cwd) {
        (Some(dir), _) => validate_directory(dir),
        (None, Some(cwd)) => validate_directory(cwd),
        (None, None) => Err(NewpostError::InvalidDirectory {
            path: PathBuf::from("."),
            reason: DirectoryProblem::NotADirectory,
        }),
    }
}
