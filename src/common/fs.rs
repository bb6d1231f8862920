//! Common file system operations with unified error handling

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs as fs_error};

/// Write `contents` to `path` through a temporary file in the same directory.
///
/// Readers never observe a half-written file. A symlinked `path` is written
/// through, not replaced. An existing target keeps its permissions; a new one
/// gets `0644` on unix.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let tmp = stage(path, &target, contents)?;

    tmp.persist(&target)
        .map_err(|e| fs_error::write_failed(path.display().to_string(), e.error.to_string()))?;
    Ok(())
}

/// Like [`write_atomic`], but fails if `path` already exists
pub fn write_new(path: &Path, contents: &str) -> Result<()> {
    let tmp = stage(path, path, contents)?;

    tmp.persist_noclobber(path)
        .map_err(|e| fs_error::write_failed(path.display().to_string(), e.error.to_string()))?;
    Ok(())
}

/// Fill a temporary file next to `target`, ready to be persisted over it
fn stage(path: &Path, target: &Path, contents: &str) -> Result<NamedTempFile> {
    let write_err =
        |e: std::io::Error| fs_error::write_failed(path.display().to_string(), e.to_string());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    match fs::metadata(target) {
        Ok(existing) => {
            fs::set_permissions(tmp.path(), existing.permissions()).map_err(write_err)?;
        }
        Err(_) => set_default_permissions(tmp.path()).map_err(write_err)?,
    }

    Ok(tmp)
}

#[cfg(unix)]
fn set_default_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Rename `from` to `to`, replacing `to` if it exists
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| {
        fs_error::move_failed(
            from.display().to_string(),
            to.display().to_string(),
            e.to_string(),
        )
    })
}
