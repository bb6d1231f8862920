//! Transaction support for the migration
//!
//! The migration touches up to four paths. A [`Transaction`] records every
//! change as it happens so that a failure half way through leaves the system
//! as it was found.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! transaction.backup_file(&source)?;
//! transaction.create_dir_all(parent)?;
//!
//! // Perform operations...
//! transaction.track_file_created(&destination);
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // rollback happens automatically
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

/// Original content of a file about to be overwritten
#[derive(Debug, Clone)]
struct FileBackup {
    path: PathBuf,
    content: Vec<u8>,
}

/// A file renamed during the transaction
#[derive(Debug, Clone)]
struct FileMove {
    from: PathBuf,
    to: PathBuf,
}

/// A transaction for atomic migration steps
#[derive(Debug, Default)]
pub struct Transaction {
    /// Files overwritten during this transaction (with original content)
    modified_files: Vec<FileBackup>,

    /// Files created during this transaction
    created_files: Vec<PathBuf>,

    /// Directories created during this transaction, outermost first
    created_dirs: Vec<PathBuf>,

    /// Renames performed during this transaction
    moved_files: Vec<FileMove>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    /// Create an empty transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current content of `path` so rollback can restore it
    pub fn backup_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read(path)
            .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))?;

        self.modified_files.push(FileBackup {
            path: path.to_path_buf(),
            content,
        });

        Ok(())
    }

    /// Track a file that was created during this transaction
    pub fn track_file_created(&mut self, path: impl Into<PathBuf>) {
        self.created_files.push(path.into());
    }

    /// Track a rename performed during this transaction
    pub fn track_move(&mut self, from: impl Into<PathBuf>, to: impl Into<PathBuf>) {
        self.moved_files.push(FileMove {
            from: from.into(),
            to: to.into(),
        });
    }

    /// Create `path` and any missing ancestors, tracking each new directory
    pub fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        let mut missing: Vec<PathBuf> = path
            .ancestors()
            .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
            .map(Path::to_path_buf)
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        fs::create_dir_all(path)
            .map_err(|e| fs_error::dir_create_failed(path.display().to_string(), e.to_string()))?;

        missing.reverse();
        for dir in missing {
            tracing::debug!(path = %dir.display(), "created directory");
            self.created_dirs.push(dir);
        }

        Ok(())
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Undo every tracked change, newest kind first
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }

        for moved in self.moved_files.iter().rev() {
            if let Err(e) = fs::rename(&moved.to, &moved.from) {
                tracing::warn!(
                    from = %moved.to.display(),
                    to = %moved.from.display(),
                    error = %e,
                    "failed to move file back"
                );
            }
        }

        for path in &self.created_files {
            if path.exists() {
                if let Err(e) = fs::remove_file(path) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to remove created file");
                }
            }
        }

        for backup in &self.modified_files {
            if let Err(e) = fs::write(&backup.path, &backup.content) {
                tracing::warn!(path = %backup.path.display(), error = %e, "failed to restore file");
            }
        }

        // Innermost first; only directories left empty are removed
        for path in self.created_dirs.iter().rev() {
            if path.is_dir()
                && fs::read_dir(path)
                    .map(|mut d| d.next().is_none())
                    .unwrap_or(false)
            {
                if let Err(e) = fs::remove_dir(path) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to remove created directory");
                }
            }
        }

        self.moved_files.clear();
        self.created_files.clear();
        self.modified_files.clear();
        self.created_dirs.clear();
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            tracing::debug!("rolling back uncommitted migration");
            self.rollback();
        }
    }
}
